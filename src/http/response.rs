//! Response mapping for injected faults.
//!
//! # Responsibilities
//! - Map FaultError to an HTTP status code deterministically
//! - Keep the error text in the body so incident tooling can match on it
//!
//! # Design Decisions
//! - Both fault kinds surface as 500: the point of the service is to hand
//!   the hosting runtime an unambiguous server-side failure
//! - No recovery, no retry; mapping is the only handling that exists

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::fault::FaultError;

impl IntoResponse for FaultError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::debug!(status = %status, error = %self, "Mapping injected fault to response");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_maps_to_500() {
        let response = FaultError::Synthetic.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_arithmetic_maps_to_500() {
        let response = FaultError::Arithmetic.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
