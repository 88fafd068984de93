//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::Metric;
use crate::planner::{RouteRequest, SearchError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/plan", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the planning form.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(
        IndexTemplate::for_network(state.planner.network())
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// All cities in the network, in load order.
async fn list_cities(State(state): State<AppState>) -> Json<CityListResponse> {
    let cities = state
        .planner
        .network()
        .cities()
        .map(CityResult::from_city)
        .collect();

    Json(CityListResponse { cities })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Plan routes between two cities.
///
/// Unknown cities are not an error: they simply have no routes.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PlanQuery>,
) -> Result<Response, AppError> {
    let metric = match query.sort.as_deref() {
        None | Some("") => Metric::Cost,
        Some(sort) => Metric::parse(sort).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
    };

    let request = RouteRequest::parse(&query.origin, &query.destination, metric)?;
    let limit = query.limit.unwrap_or(state.config.max_results);

    let result = state.planner.search(&request).await;

    info!(
        origin = %request.origin,
        destination = %request.destination,
        %metric,
        routes = result.routes.len(),
        "planned route"
    );

    if accepts_html(&headers) {
        let html = RouteResultsTemplate::from_result(&request, &result, limit)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanResponse::from_result(&request, &result, limit)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
