//! Planner configuration.

/// Configuration parameters for route planning and reporting.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Maximum number of routes reported per request.
    pub max_results: usize,

    /// Number used to label requests typed in at the interactive prompt.
    pub manual_request_number: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, manual_request_number: usize) -> Self {
        Self {
            max_results,
            manual_request_number,
        }
    }

    /// Returns a copy with a different result limit.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: 3,
            manual_request_number: 999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.max_results, 3);
        assert_eq!(config.manual_request_number, 999);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(5, 1);

        assert_eq!(config.max_results, 5);
        assert_eq!(config.manual_request_number, 1);
    }

    #[test]
    fn with_max_results() {
        let config = PlannerConfig::default().with_max_results(10);

        assert_eq!(config.max_results, 10);
        assert_eq!(config.manual_request_number, 999);
    }
}
