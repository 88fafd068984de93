//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Metric, Route};
use crate::network::City;
use crate::planner::{RouteRequest, SearchResult};

/// Query string for route planning.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    /// Origin city name
    pub origin: String,

    /// Destination city name
    pub destination: String,

    /// `cost`/`time` or `C`/`T` (defaults to cost)
    pub sort: Option<String>,

    /// Maximum routes to return (defaults to the planner config)
    pub limit: Option<usize>,
}

/// A route in plan results.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteResult {
    /// Cities visited, origin first
    pub path: Vec<String>,

    /// Total cost
    pub cost: u64,

    /// Total time in minutes
    pub time: u64,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            path: route.path().iter().map(|c| c.as_str().to_string()).collect(),
            cost: route.total_cost(),
            time: route.total_time(),
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub origin: String,
    pub destination: String,
    pub metric: Metric,

    /// Number of routes found in total (before the limit)
    pub total_routes: usize,

    /// Frontier entries processed by the search
    pub routes_explored: usize,

    /// Best routes, ranked
    pub routes: Vec<RouteResult>,
}

impl PlanResponse {
    pub fn from_result(request: &RouteRequest, result: &SearchResult, limit: usize) -> Self {
        Self {
            origin: request.origin.to_string(),
            destination: request.destination.to_string(),
            metric: request.metric,
            total_routes: result.routes.len(),
            routes_explored: result.routes_explored,
            routes: result.top(limit).iter().map(RouteResult::from_route).collect(),
        }
    }
}

/// A city in the city list.
#[derive(Debug, Serialize, Deserialize)]
pub struct CityResult {
    pub name: String,

    /// Number of outgoing connections
    pub connections: usize,
}

impl CityResult {
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name().to_string(),
            connections: city.connections().len(),
        }
    }
}

/// Response listing all cities.
#[derive(Debug, Serialize, Deserialize)]
pub struct CityListResponse {
    pub cities: Vec<CityResult>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
