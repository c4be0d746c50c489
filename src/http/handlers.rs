//! Route handlers for the responder's three endpoints.

use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;
use crate::observability::metrics;

/// Banner returned by the root route on the healthy path.
pub const BANNER: &str = "AutoOpsAI Web App is running!";

/// Correlation id assigned by the request-id middleware. Handlers invoked
/// without the middleware (unit tests, embedding) get a fresh UUID.
fn request_id(headers: &HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// GET `/` — healthy banner, or the injected failure when fail mode is on.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let response = match state.responder.health(state.fail_mode, &request_id) {
        Ok(_) => BANNER.into_response(),
        Err(fault) => fault.into_response(),
    };

    metrics::record_request("/", response.status().as_u16(), start);
    response
}

/// GET `/stress` — burn CPU for the configured window.
///
/// The busy loop runs on a blocking thread so it consumes exactly one
/// worker slot for the window's duration without stalling the runtime.
pub async fn stress(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let responder = state.responder.clone();

    let response = match tokio::task::spawn_blocking(move || responder.stress()).await {
        Ok(message) => message.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Stress worker failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "stress worker failed").into_response()
        }
    };

    metrics::record_request("/stress", response.status().as_u16(), start);
    response
}

/// GET `/error` — deterministic divide-by-zero, fails every time.
pub async fn error_trigger(State(state): State<AppState>) -> Response {
    let start = Instant::now();

    let response = match state.responder.error() {
        // Unreachable by contract; kept so the handler stays total.
        Ok(value) => value.to_string().into_response(),
        Err(fault) => fault.into_response(),
    };

    metrics::record_request("/error", response.status().as_u16(), start);
    response
}
