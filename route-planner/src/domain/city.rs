//! City name type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use super::DomainError;

/// A validated, case-insensitive city name.
///
/// The name keeps the spelling it was created with for display, but
/// equality, hashing and ordering all use a lowercased key. Two names that
/// differ only in case are the same city.
///
/// # Examples
///
/// ```
/// use route_planner::domain::CityName;
///
/// let a = CityName::new("Dallas").unwrap();
/// let b = CityName::new("  DALLAS ").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b.as_str(), "DALLAS");
///
/// // Blank names are rejected
/// assert!(CityName::new("   ").is_err());
/// ```
#[derive(Clone)]
pub struct CityName {
    display: String,
    key: String,
}

impl CityName {
    /// Create a city name, trimming surrounding whitespace.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }

        Ok(Self {
            display: trimmed.to_string(),
            key: trimmed.to_lowercase(),
        })
    }

    /// The name as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The lowercased comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive comparison against a raw string.
    pub fn matches(&self, other: &str) -> bool {
        self.key == other.trim().to_lowercase()
    }
}

impl PartialEq for CityName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CityName {}

impl Hash for CityName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for CityName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CityName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Debug for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityName({})", self.display)
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for CityName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}
