//! HTTP Middleware
//!
//! API-key gate for the product routes, plus the 4xx/5xx logging middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::{AuthConfig, DEV_API_KEY};

use super::error::ApiError;
use super::state::AppState;

/// Header carrying the shared-secret API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Resolved enforcement state.
#[derive(Debug, Clone)]
enum AuthMode {
    /// Every request passes, whatever credential it carries.
    Disabled,
    /// The `X-API-Key` header must equal the configured secret.
    Enforced(String),
}

/// API-key check, resolved once at startup from [`AuthConfig`].
///
/// Enforcement is off when the operator disabled it explicitly, and also when
/// the configured key is still the development placeholder. The latter keeps
/// local extension builds working without a secret; the warning below is the
/// only trace of it.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    mode: AuthMode,
}

impl ApiKeyAuth {
    pub fn from_config(config: &AuthConfig) -> Self {
        if !config.enabled {
            tracing::warn!("API key authentication disabled by configuration");
            return Self {
                mode: AuthMode::Disabled,
            };
        }

        if config.api_key == DEV_API_KEY {
            tracing::warn!(
                "API key left at the development default; authentication disabled"
            );
            return Self {
                mode: AuthMode::Disabled,
            };
        }

        Self {
            mode: AuthMode::Enforced(config.api_key.clone()),
        }
    }

    /// Check a supplied credential against the resolved mode.
    pub fn verify(&self, supplied: Option<&str>) -> bool {
        match &self.mode {
            AuthMode::Disabled => true,
            AuthMode::Enforced(key) => supplied == Some(key.as_str()),
        }
    }
}

/// Reject requests whose `X-API-Key` header does not verify. The body is
/// never touched on the rejection path.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let supplied = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if !state.auth.verify(supplied) {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Log 4xx responses as warnings and 5xx responses as errors.
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
