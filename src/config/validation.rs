//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (stress window bounded, timeouts sane)
//! - Check the bind address actually parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: `ResponderConfig → Result<(), Vec<_>>`
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ResponderConfig;

/// Upper bound on the stress window. A demo endpoint that pins a worker
/// for longer than this is indistinguishable from the unbounded defect.
pub const MAX_STRESS_WINDOW_SECS: u64 = 300;

/// A single semantic validation failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    StressWindowOutOfRange(u64),
    RequestTimeoutTooShort { request_secs: u64, window_secs: u64 },
    EmptyServiceName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "bind_address {:?} is not a valid socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "metrics_address {:?} is not a valid socket address", addr)
            }
            ValidationError::StressWindowOutOfRange(secs) => {
                write!(
                    f,
                    "stress window {}s out of range (1..={}s)",
                    secs, MAX_STRESS_WINDOW_SECS
                )
            }
            ValidationError::RequestTimeoutTooShort {
                request_secs,
                window_secs,
            } => {
                write!(
                    f,
                    "request timeout {}s must exceed stress window {}s",
                    request_secs, window_secs
                )
            }
            ValidationError::EmptyServiceName => write!(f, "service_name must not be empty"),
        }
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ResponderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let window = config.stress.window_secs;
    if window == 0 || window > MAX_STRESS_WINDOW_SECS {
        errors.push(ValidationError::StressWindowOutOfRange(window));
    } else if config.timeouts.request_secs <= window {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs: config.timeouts.request_secs,
            window_secs: window,
        });
    }

    if config.fault.service_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ResponderConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let mut config = ResponderConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::InvalidBindAddress(_)
        ));
    }

    #[test]
    fn test_stress_window_bounds() {
        let mut config = ResponderConfig::default();
        config.stress.window_secs = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::StressWindowOutOfRange(0)]
        );

        config.stress.window_secs = MAX_STRESS_WINDOW_SECS + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_timeout_must_exceed_window() {
        let mut config = ResponderConfig::default();
        config.stress.window_secs = 30;
        config.timeouts.request_secs = 30;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::RequestTimeoutTooShort { .. }
        ));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = ResponderConfig::default();
        config.listener.bind_address = "nope".to_string();
        config.fault.service_name = "  ".to_string();
        config.stress.window_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
