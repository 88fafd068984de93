//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from ingestion and HTTP errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// City names must contain at least one non-whitespace character
    #[error("city name must not be empty")]
    EmptyCityName,

    /// Sort key is neither cost nor time
    #[error("invalid sort key {0:?}: expected C (cost) or T (time)")]
    InvalidMetric(String),

    /// Route has no cities
    #[error("route must contain at least one city")]
    EmptyRoute,

    /// Route visits the same city more than once
    #[error("route visits {0} more than once")]
    RepeatedCity(String),
}
