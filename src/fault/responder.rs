//! The fault-injection responder.
//!
//! # Responsibilities
//! - Branch between a healthy payload and a synthetic failure on FailMode
//! - Burn CPU for a bounded window on demand
//! - Produce a deterministic arithmetic fault for crash-signal pipelines

use std::time::{Duration, Instant};

use crate::config::ResponderConfig;
use crate::fault::types::{FailMode, FaultError, FaultResult, HealthResponse};

/// Responder shared across requests. Holds only immutable configuration;
/// all per-request state arrives as arguments.
#[derive(Debug, Clone)]
pub struct Responder {
    service: String,
    stress_window: Duration,
}

impl Responder {
    pub fn new(service: impl Into<String>, stress_window: Duration) -> Self {
        Self {
            service: service.into(),
            stress_window,
        }
    }

    pub fn from_config(config: &ResponderConfig) -> Self {
        Self::new(
            config.fault.service_name.clone(),
            Duration::from_secs(config.stress.window_secs),
        )
    }

    /// Health check with fault injection.
    ///
    /// Emits exactly one log record per call: error severity on the failing
    /// branch, info severity on the healthy one. The failing branch never
    /// constructs a response.
    pub fn health(&self, fail_mode: FailMode, request_id: &str) -> FaultResult<HealthResponse> {
        if fail_mode.enabled() {
            tracing::error!(
                request_id = %request_id,
                "Intentional failure injected for incident testing"
            );
            return Err(FaultError::Synthetic);
        }

        let response = HealthResponse::healthy(&self.service, request_id);
        tracing::info!(
            request_id = %request_id,
            service = %response.service,
            "Healthy response returned"
        );
        Ok(response)
    }

    /// Busy-wait for the configured window, then report completion.
    ///
    /// Deliberately blocks the executing thread without yielding or
    /// sleeping; the window is the only termination condition. Callers on
    /// an async runtime must run this on a blocking thread.
    pub fn stress(&self) -> &'static str {
        let start = Instant::now();
        while start.elapsed() < self.stress_window {
            std::hint::spin_loop();
        }
        "CPU stress test completed"
    }

    /// Deterministic divide-by-zero. Fails on every invocation, with no
    /// input dependence; used purely as a crash signal for observability
    /// pipelines.
    pub fn error(&self) -> FaultResult<i64> {
        let numerator: i64 = 1;
        let denominator: i64 = 0;
        numerator
            .checked_div(denominator)
            .ok_or(FaultError::Arithmetic)
    }

    /// The configured busy-wait bound.
    pub fn stress_window(&self) -> Duration {
        self.stress_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        Responder::new("autoops-lambda", Duration::from_millis(50))
    }

    #[test]
    fn test_health_returns_payload_when_fail_mode_off() {
        let response = responder()
            .health(FailMode::from(false), "req-1")
            .expect("healthy branch");
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "autoops-lambda");
        assert_eq!(response.request_id, "req-1");
    }

    #[test]
    fn test_health_fails_when_fail_mode_on() {
        let err = responder()
            .health(FailMode::from(true), "req-2")
            .expect_err("failing branch");
        assert_eq!(err, FaultError::Synthetic);
        assert_eq!(err.to_string(), "Injected failure via FAIL_MODE");
    }

    #[test]
    fn test_health_honors_parsed_flag_values() {
        let responder = responder();
        for value in ["false", "", "0", "no"] {
            assert!(responder.health(FailMode::parse(value), "req").is_ok());
        }
        assert!(responder.health(FailMode::parse("TRUE"), "req").is_err());
    }

    #[test]
    fn test_stress_respects_window() {
        let responder = responder();
        let start = Instant::now();
        let message = responder.stress();
        let elapsed = start.elapsed();

        assert_eq!(message, "CPU stress test completed");
        assert!(
            elapsed >= Duration::from_millis(50),
            "returned early: {:?}",
            elapsed
        );
        // Generous slack for loaded CI machines.
        assert!(elapsed < Duration::from_secs(5), "overran window: {:?}", elapsed);
    }

    #[test]
    fn test_error_always_fails() {
        let responder = responder();
        for _ in 0..3 {
            assert_eq!(responder.error(), Err(FaultError::Arithmetic));
        }
    }
}
