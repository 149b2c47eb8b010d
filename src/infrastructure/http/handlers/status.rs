//! Status Handler
//!
//! Unauthenticated liveness endpoint; the extension polls it to decide
//! whether the backend is reachable.

use axum::Json;
use serde::Serialize;

/// Status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Root endpoint - liveness check
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Global Radar API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
