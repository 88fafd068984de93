//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::Route;
use crate::network::FlightNetwork;
use crate::planner::{RouteRequest, SearchResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cities: Vec<String>,
}

impl IndexTemplate {
    pub fn for_network(network: &FlightNetwork) -> Self {
        Self {
            cities: network
                .cities()
                .map(|c| c.name().as_str().to_string())
                .collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Ranked routes fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub origin: String,
    pub destination: String,
    pub metric: String,
    pub total_routes: usize,
    pub routes: Vec<RouteView>,
}

impl RouteResultsTemplate {
    pub fn from_result(request: &RouteRequest, result: &SearchResult, limit: usize) -> Self {
        Self {
            origin: request.origin.to_string(),
            destination: request.destination.to_string(),
            metric: request.metric.label().to_string(),
            total_routes: result.routes.len(),
            routes: result
                .top(limit)
                .iter()
                .enumerate()
                .map(|(idx, route)| RouteView::from_route(idx + 1, route))
                .collect(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub position: usize,
    pub cities: Vec<String>,
    pub cost: u64,
    pub time: u64,
}

impl RouteView {
    pub fn from_route(position: usize, route: &Route) -> Self {
        Self {
            position,
            cities: route.path().iter().map(|c| c.as_str().to_string()).collect(),
            cost: route.total_cost(),
            time: route.total_time(),
        }
    }

    /// Number of connections taken.
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Cost formatted with two decimals.
    pub fn cost_display(&self) -> String {
        format!("{}.00", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;
    use crate::network::NetworkBuilder;
    use crate::planner::plan_routes;

    fn texas() -> FlightNetwork {
        NetworkBuilder::new()
            .add("Dallas", "Austin", 50, 60)
            .add("Austin", "Houston", 40, 90)
            .add("Dallas", "Houston", 120, 70)
            .build()
    }

    #[test]
    fn route_view() {
        let net = texas();
        let request = RouteRequest::parse("Dallas", "Houston", Metric::Cost).unwrap();
        let result = plan_routes(&net, &request);

        let view = RouteView::from_route(1, &result.routes[0]);
        assert_eq!(view.cities, vec!["Dallas", "Austin", "Houston"]);
        assert_eq!(view.hops(), 2);
        assert_eq!(view.cost_display(), "90.00");
    }

    #[test]
    fn cost_display_keeps_every_digit() {
        let view = RouteView {
            position: 1,
            cities: vec!["A".into(), "B".into()],
            cost: (1 << 53) + 1,
            time: 0,
        };
        assert_eq!(view.cost_display(), "9007199254740993.00");
    }

    #[test]
    fn index_renders_city_options() {
        let html = IndexTemplate::for_network(&texas()).render().unwrap();
        assert!(html.contains("<option value=\"Austin\">"));
        assert!(html.contains("<option value=\"Houston\">"));
    }

    #[test]
    fn results_render_routes() {
        let net = texas();
        let request = RouteRequest::parse("Dallas", "Houston", Metric::Time).unwrap();
        let result = plan_routes(&net, &request);

        let html = RouteResultsTemplate::from_result(&request, &result, 3)
            .render()
            .unwrap();
        assert!(html.contains("Dallas &rarr; Houston"));
        assert!(html.contains("120.00"));
        assert!(!html.contains("No route"));
    }

    #[test]
    fn results_render_empty_message() {
        let request = RouteRequest::parse("Dallas", "Boise", Metric::Cost).unwrap();

        let html = RouteResultsTemplate::from_result(&request, &SearchResult::empty(), 3)
            .render()
            .unwrap();
        assert!(html.contains("No route can be planned between Dallas and Boise."));
    }
}
