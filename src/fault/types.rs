//! Fault-injection types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fault-injection toggle for strong typing.
///
/// Only the literal `"true"` (case-insensitive) enables fail mode; every
/// other value, including an unset variable, selects the healthy path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FailMode(bool);

impl FailMode {
    /// Environment variable controlling fault injection.
    pub const ENV_VAR: &'static str = "FAIL_MODE";

    /// Parse a flag value. The comparison against `"true"` lives here and
    /// nowhere else.
    pub fn parse(value: &str) -> Self {
        Self(value.trim().eq_ignore_ascii_case("true"))
    }

    /// Read the flag from the process environment, if the variable is set.
    pub fn from_env() -> Option<Self> {
        std::env::var(Self::ENV_VAR).ok().map(|v| Self::parse(&v))
    }

    /// Whether fault injection is active.
    pub fn enabled(self) -> bool {
        self.0
    }
}

impl From<bool> for FailMode {
    fn from(enabled: bool) -> Self {
        Self(enabled)
    }
}

/// Healthy payload returned on the non-failing branch.
///
/// Constructed fresh per request and discarded after serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Fixed service identifier.
    pub service: String,

    /// Always `"healthy"`; the failing branch never constructs this type.
    pub status: String,

    /// Request-correlation identifier supplied by the calling environment.
    pub request_id: String,
}

impl HealthResponse {
    /// Build the healthy payload for one request.
    pub fn healthy(service: &str, request_id: &str) -> Self {
        Self {
            service: service.to_string(),
            status: "healthy".to_string(),
            request_id: request_id.to_string(),
        }
    }
}

/// Deliberately produced faults. Never caught or retried internally;
/// propagation to the hosting runtime is the intended behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaultError {
    /// Injected via the FAIL_MODE flag.
    #[error("Injected failure via FAIL_MODE")]
    Synthetic,

    /// Deliberate divide-by-zero, triggered by the error endpoint.
    #[error("division by zero")]
    Arithmetic,
}

/// Result type for fault-injection operations.
pub type FaultResult<T> = Result<T, FaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_mode_parse_true_variants() {
        assert!(FailMode::parse("true").enabled());
        assert!(FailMode::parse("TRUE").enabled());
        assert!(FailMode::parse("True").enabled());
        assert!(FailMode::parse(" true ").enabled());
    }

    #[test]
    fn test_fail_mode_parse_everything_else_is_healthy() {
        for value in ["false", "FALSE", "1", "yes", "on", "", "truthy"] {
            assert!(!FailMode::parse(value).enabled(), "value {:?}", value);
        }
        assert!(!FailMode::default().enabled());
    }

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse::healthy("autoops-lambda", "req-42");
        assert_eq!(response.service, "autoops-lambda");
        assert_eq!(response.status, "healthy");
        assert_eq!(response.request_id, "req-42");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FaultError::Synthetic.to_string(),
            "Injected failure via FAIL_MODE"
        );
        assert!(FaultError::Arithmetic.to_string().contains("zero"));
    }
}
