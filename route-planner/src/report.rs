//! Plain-text plan reports.
//!
//! ```text
//! Flight 1: Dallas, Houston (Cost)
//!     Path 1: Dallas -> Austin -> Houston. Time: 150 Cost: 90.00
//!     Path 2: Dallas -> Houston. Time: 70 Cost: 120.00
//! ```

use std::fmt::Write;

use crate::domain::Route;
use crate::planner::{RouteRequest, SearchResult};

/// Indentation for lines under a request header.
const INDENT: &str = "    ";

/// Header line for a request.
pub fn format_header(number: usize, request: &RouteRequest) -> String {
    format!(
        "Flight {}: {}, {} ({})",
        number,
        request.origin,
        request.destination,
        request.metric.label()
    )
}

/// One ranked route, 1-based position.
pub fn format_route(position: usize, route: &Route) -> String {
    format!(
        "{INDENT}Path {}: {}. Time: {} Cost: {}.00",
        position,
        route.path_display(),
        route.total_time(),
        route.total_cost()
    )
}

/// Full report for one request: header, then up to `max_results` routes.
pub fn format_plan(
    number: usize,
    request: &RouteRequest,
    result: &SearchResult,
    max_results: usize,
) -> String {
    let mut out = format_header(number, request);
    out.push('\n');

    if result.is_empty() {
        let _ = writeln!(
            out,
            "{INDENT}No flight plan can be created between {} and {}.",
            request.origin, request.destination
        );
        return out;
    }

    for (idx, route) in result.top(max_results).iter().enumerate() {
        out.push_str(&format_route(idx + 1, route));
        out.push('\n');
    }

    out
}
