//! Route type.
//!
//! A `Route` is one complete, cycle-free path through the network together
//! with its accumulated weights and the metric it is ranked by.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use super::{CityName, DomainError, Metric};

/// A simple path from an origin to a destination.
///
/// # Invariants
///
/// - At least one city (exactly one only when origin equals destination)
/// - No city appears twice
/// - The ranking metric never changes after construction; use
///   [`Route::with_metric`] to derive a differently-ranked copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: Vec<CityName>,
    total_cost: u64,
    total_time: u64,
    metric: Metric,
}

impl Route {
    /// Constructs a route from its path and totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or visits a city twice.
    pub fn new(
        path: Vec<CityName>,
        total_cost: u64,
        total_time: u64,
        metric: Metric,
    ) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let mut seen = HashSet::with_capacity(path.len());
        for city in &path {
            if !seen.insert(city) {
                return Err(DomainError::RepeatedCity(city.to_string()));
            }
        }

        Ok(Self {
            path,
            total_cost,
            total_time,
            metric,
        })
    }

    /// Cities visited, origin first.
    pub fn path(&self) -> &[CityName] {
        &self.path
    }

    /// The first city.
    pub fn origin(&self) -> &CityName {
        &self.path[0]
    }

    /// The last city.
    pub fn destination(&self) -> &CityName {
        &self.path[self.path.len() - 1]
    }

    /// Number of connections taken.
    pub fn hop_count(&self) -> usize {
        self.path.len() - 1
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The value this route is ranked by.
    pub fn rank_key(&self) -> u64 {
        self.metric.select(self.total_cost, self.total_time)
    }

    /// Compare against another route using this route's metric.
    pub fn cmp_rank(&self, other: &Route) -> Ordering {
        let ours = self.rank_key();
        let theirs = self.metric.select(other.total_cost, other.total_time);
        ours.cmp(&theirs)
    }

    /// Derive an identical route ranked by a different metric.
    pub fn with_metric(self, metric: Metric) -> Route {
        Route { metric, ..self }
    }

    /// Path rendered as `A -> B -> C`.
    pub fn path_display(&self) -> String {
        self.path
            .iter()
            .map(CityName::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (cost {}, time {})",
            self.path_display(),
            self.total_cost,
            self.total_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> CityName {
        CityName::new(s).unwrap()
    }

    fn path(names: &[&str]) -> Vec<CityName> {
        names.iter().map(|n| city(n)).collect()
    }

    #[test]
    fn accessors() {
        let route = Route::new(path(&["Dallas", "Austin", "Houston"]), 90, 150, Metric::Cost)
            .unwrap();

        assert_eq!(route.origin(), &city("Dallas"));
        assert_eq!(route.destination(), &city("Houston"));
        assert_eq!(route.hop_count(), 2);
        assert_eq!(route.total_cost(), 90);
        assert_eq!(route.total_time(), 150);
        assert_eq!(route.metric(), Metric::Cost);
        assert_eq!(route.rank_key(), 90);
    }

    #[test]
    fn single_city_route() {
        let route = Route::new(path(&["Dallas"]), 0, 0, Metric::Time).unwrap();
        assert_eq!(route.origin(), route.destination());
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(
            Route::new(vec![], 0, 0, Metric::Cost),
            Err(DomainError::EmptyRoute)
        );
    }

    #[test]
    fn rejects_repeated_city_ignoring_case() {
        let err = Route::new(path(&["Dallas", "Austin", "DALLAS"]), 1, 1, Metric::Cost)
            .unwrap_err();
        assert_eq!(err, DomainError::RepeatedCity("DALLAS".into()));
    }

    #[test]
    fn cmp_rank_uses_own_metric() {
        let cheap_slow = Route::new(path(&["A", "B"]), 10, 100, Metric::Cost).unwrap();
        let dear_fast = Route::new(path(&["A", "C", "B"]), 50, 20, Metric::Cost).unwrap();

        assert_eq!(cheap_slow.cmp_rank(&dear_fast), Ordering::Less);

        let cheap_slow = cheap_slow.with_metric(Metric::Time);
        assert_eq!(cheap_slow.cmp_rank(&dear_fast), Ordering::Greater);
    }

    #[test]
    fn with_metric_keeps_totals() {
        let route = Route::new(path(&["A", "B"]), 10, 100, Metric::Cost).unwrap();
        let retagged = route.clone().with_metric(Metric::Time);

        assert_eq!(retagged.metric(), Metric::Time);
        assert_eq!(retagged.path(), route.path());
        assert_eq!(retagged.total_cost(), 10);
        assert_eq!(retagged.rank_key(), 100);
    }

    #[test]
    fn display() {
        let route = Route::new(path(&["Dallas", "Houston"]), 120, 70, Metric::Cost).unwrap();
        assert_eq!(route.path_display(), "Dallas -> Houston");
        assert_eq!(route.to_string(), "Dallas -> Houston (cost 120, time 70)");
    }
}
