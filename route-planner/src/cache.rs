//! Caching layer for planned routes.
//!
//! The network never changes once loaded, so a ranked search result for a
//! given (origin, destination, metric) stays correct for the lifetime of the
//! process. The TTL and capacity only bound memory use.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{CityName, Metric};
use crate::network::FlightNetwork;
use crate::planner::{Planner, RouteRequest, SearchResult};

/// Cache key: (origin, destination, metric).
type RouteKey = (CityName, CityName, Metric);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Network with cached route searches.
pub struct CachedPlanner {
    network: Arc<FlightNetwork>,
    results: MokaCache<RouteKey, Arc<SearchResult>>,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(network: Arc<FlightNetwork>, config: &CacheConfig) -> Self {
        let results = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { network, results }
    }

    /// The underlying network.
    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }

    /// Ranked routes for a request, using the cache if available.
    pub async fn search(&self, request: &RouteRequest) -> Arc<SearchResult> {
        let key = (
            request.origin.clone(),
            request.destination.clone(),
            request.metric,
        );

        if let Some(cached) = self.results.get(&key).await {
            trace!(origin = %request.origin, destination = %request.destination, "route cache hit");
            return cached;
        }

        let result = Arc::new(Planner::new(self.network.as_ref()).search(request));
        self.results.insert(key, result.clone()).await;
        result
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.results.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn planner() -> CachedPlanner {
        let net = NetworkBuilder::new()
            .add("Dallas", "Austin", 50, 60)
            .add("Austin", "Houston", 40, 90)
            .add("Dallas", "Houston", 120, 70)
            .build();
        CachedPlanner::new(Arc::new(net), &CacheConfig::default())
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn second_search_is_served_from_cache() {
        let planner = planner();
        let request = RouteRequest::parse("Dallas", "Houston", Metric::Cost).unwrap();

        let first = planner.search(&request).await;
        let second = planner.search(&request).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.routes.len(), 2);
    }

    #[tokio::test]
    async fn key_ignores_case_but_not_metric() {
        let planner = planner();
        let by_cost = RouteRequest::parse("Dallas", "Houston", Metric::Cost).unwrap();
        let by_cost_upper = RouteRequest::parse("DALLAS", "HOUSTON", Metric::Cost).unwrap();
        let by_time = RouteRequest::parse("Dallas", "Houston", Metric::Time).unwrap();

        let a = planner.search(&by_cost).await;
        let b = planner.search(&by_cost_upper).await;
        let c = planner.search(&by_time).await;

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(c.routes[0].path_display(), "Dallas -> Houston");
    }

    #[tokio::test]
    async fn invalidate_recomputes() {
        let planner = planner();
        let request = RouteRequest::parse("Dallas", "Houston", Metric::Cost).unwrap();

        let first = planner.search(&request).await;
        planner.invalidate_all();
        let second = planner.search(&request).await;

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }
}
