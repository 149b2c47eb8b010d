//! HTTP Routes
//!
//! API Endpoints:
//! - /                           GET   liveness status (no auth)
//! - /api/products/scan          POST  record a scraped product, quote shipping
//! - /api/products/publish       POST  fabricate a published-listing id
//! - /api/products/match-image   POST  mocked reverse image search
//! - /api/products/drafts        GET   stored drafts (placeholder, always empty)

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_api_key;
use super::state::AppState;

/// Build all routes.
pub fn create_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .nest("/api/products", product_routes(state.clone()))
        .with_state(state)
}

/// Product routes, gated by the API-key check.
fn product_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/scan", post(handlers::scan_product))
        .route("/publish", post(handlers::publish_product))
        .route("/match-image", post(handlers::match_image))
        .route("/drafts", get(handlers::list_drafts))
        .route_layer(middleware::from_fn_with_state(state, require_api_key))
}
