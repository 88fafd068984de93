//! Exhaustive route search.
//!
//! Finds every simple path between two cities using backtracking driven by
//! an explicit stack, so the depth of a path is bounded by memory rather
//! than by the call stack.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::domain::{CityName, DomainError, Metric, Route};
use crate::network::{Connection, FlightNetwork};

use super::rank::{heap_sort_by, rank_order};

/// Error from building a search request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

impl From<DomainError> for SearchError {
    fn from(e: DomainError) -> Self {
        SearchError::InvalidRequest(e.to_string())
    }
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Where the route starts.
    pub origin: CityName,

    /// Where the route ends.
    pub destination: CityName,

    /// What the found routes are ranked by.
    pub metric: Metric,
}

impl RouteRequest {
    /// Create a new route request.
    pub fn new(origin: CityName, destination: CityName, metric: Metric) -> Self {
        Self {
            origin,
            destination,
            metric,
        }
    }

    /// Create a request from raw city names.
    ///
    /// Fails only on blank names; cities that aren't in the network are a
    /// valid request with no routes.
    pub fn parse(origin: &str, destination: &str, metric: Metric) -> Result<Self, SearchError> {
        Ok(Self::new(
            CityName::new(origin)?,
            CityName::new(destination)?,
            metric,
        ))
    }
}

/// Result of route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Found routes, ranked best-first.
    pub routes: Vec<Route>,

    /// Number of frontier entries processed during search.
    pub routes_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            routes_explored: 0,
        }
    }

    /// The best `n` routes.
    pub fn top(&self, n: usize) -> &[Route] {
        &self.routes[..n.min(self.routes.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Trait for providing outgoing connections.
///
/// This abstraction allows the planner to be tested with hand-built
/// adjacency data.
pub trait ConnectionProvider {
    /// Outgoing connections of `city`, or `None` if the city is unknown.
    fn connections_from(&self, city: &CityName) -> Option<&[Connection]>;

    /// The spelling the provider uses for `city`, if it has one.
    fn canonical_name(&self, _city: &CityName) -> Option<&CityName> {
        None
    }
}

impl ConnectionProvider for FlightNetwork {
    fn connections_from(&self, city: &CityName) -> Option<&[Connection]> {
        self.get(city).map(|c| c.connections())
    }

    fn canonical_name(&self, city: &CityName) -> Option<&CityName> {
        self.get(city).map(|c| c.name())
    }
}

/// Backtracking state: a partial route ending at `city`.
///
/// Every entry owns its own path and visited set, so sibling branches never
/// observe each other's extensions.
#[derive(Debug, Clone)]
struct FrontierEntry {
    /// Current city.
    city: CityName,

    /// Cost accumulated so far.
    cost: u64,

    /// Time accumulated so far.
    time: u64,

    /// Cities taken so far, origin first.
    path: Vec<CityName>,

    /// Cities already on `path`.
    visited: HashSet<CityName>,
}

impl FrontierEntry {
    /// The single entry a search starts from.
    fn start(origin: CityName) -> Self {
        let mut visited = HashSet::new();
        visited.insert(origin.clone());

        Self {
            path: vec![origin.clone()],
            city: origin,
            cost: 0,
            time: 0,
            visited,
        }
    }

    /// Check if we've reached the destination.
    fn at_destination(&self, destination: &CityName) -> bool {
        &self.city == destination
    }

    /// Whether taking `connection` would revisit a city.
    fn would_revisit(&self, connection: &Connection) -> bool {
        self.visited.contains(&connection.to)
    }

    /// A new entry one connection further along, or `None` if either total
    /// would overflow.
    fn extend(&self, connection: &Connection) -> Option<Self> {
        let cost = self.cost.checked_add(connection.cost)?;
        let time = self.time.checked_add(connection.time)?;

        let mut path = self.path.clone();
        path.push(connection.to.clone());

        let mut visited = self.visited.clone();
        visited.insert(connection.to.clone());

        Some(Self {
            city: connection.to.clone(),
            cost,
            time,
            path,
            visited,
        })
    }

    /// Build a route from the current entry.
    fn to_route(&self, metric: Metric) -> Result<Route, DomainError> {
        Route::new(self.path.clone(), self.cost, self.time, metric)
    }
}

/// Route planner over a connection provider.
pub struct Planner<'a, P: ConnectionProvider> {
    provider: &'a P,
}

impl<'a, P: ConnectionProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Find every simple route for the request, in discovery order.
    pub fn find_routes(&self, request: &RouteRequest) -> Vec<Route> {
        self.enumerate(request).routes
    }

    /// Find every simple route for the request, ranked best-first.
    pub fn search(&self, request: &RouteRequest) -> SearchResult {
        let SearchResult {
            routes,
            routes_explored,
        } = self.enumerate(request);

        SearchResult {
            routes: heap_sort_by(routes, rank_order),
            routes_explored,
        }
    }

    fn enumerate(&self, request: &RouteRequest) -> SearchResult {
        // Unknown endpoints mean "no route", not an error
        if self.provider.connections_from(&request.origin).is_none()
            || self.provider.connections_from(&request.destination).is_none()
        {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                "origin or destination not in network"
            );
            return SearchResult::empty();
        }

        let origin = self
            .provider
            .canonical_name(&request.origin)
            .unwrap_or(&request.origin)
            .clone();

        let mut routes = Vec::new();
        let mut routes_explored = 0;
        let mut stack = vec![FrontierEntry::start(origin)];

        while let Some(entry) = stack.pop() {
            routes_explored += 1;

            if entry.at_destination(&request.destination) {
                match entry.to_route(request.metric) {
                    Ok(route) => routes.push(route),
                    Err(e) => warn!(error = %e, path = ?entry.path, "dropping invalid route"),
                }
                continue;
            }

            let Some(connections) = self.provider.connections_from(&entry.city) else {
                trace!(city = %entry.city, "city has no network entry, dropping branch");
                continue;
            };

            trace!(
                city = %entry.city,
                depth = entry.path.len(),
                connections = connections.len(),
                "expanding"
            );

            for connection in connections {
                if entry.would_revisit(connection) {
                    continue;
                }
                match entry.extend(connection) {
                    Some(next) => stack.push(next),
                    None => warn!(
                        from = %entry.city,
                        to = %connection.to,
                        "route totals overflow, dropping branch"
                    ),
                }
            }
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            routes = routes.len(),
            routes_explored,
            "route search complete"
        );

        SearchResult {
            routes,
            routes_explored,
        }
    }
}

/// Find and rank every route between two cities of a network.
pub fn plan_routes(network: &FlightNetwork, request: &RouteRequest) -> SearchResult {
    Planner::new(network).search(request)
}
