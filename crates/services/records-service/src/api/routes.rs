//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_routes, offer_routes, order_routes, user_routes};
use super::openapi::openapi_json;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Banner and health check
        .merge(health_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Record routes carry their full paths, trailing slash included
        .merge(user_routes())
        .merge(order_routes())
        .merge(offer_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
