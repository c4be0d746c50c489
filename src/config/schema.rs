//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! responder. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the fault-injection responder.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ResponderConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Fault-injection settings.
    pub fault: FaultConfig,

    /// CPU stress endpoint settings.
    pub stress: StressConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Fault-injection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Whether the health path fails with a synthetic error.
    /// Overridden at startup by the FAIL_MODE environment variable.
    pub fail_mode: bool,

    /// Service identifier reported in healthy payloads.
    pub service_name: String,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            fail_mode: false,
            service_name: "autoops-lambda".to_string(),
        }
    }
}

/// CPU stress endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StressConfig {
    /// Busy-wait bound in seconds. The loop never runs past this window.
    pub window_secs: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self { window_secs: 10 }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds. Must exceed the stress window so
    /// the timeout layer cannot truncate a stress run.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Whether to expose Prometheus metrics.
    pub metrics_enabled: bool,

    /// Address for the metrics exporter's own listener.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResponderConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(!config.fault.fail_mode);
        assert_eq!(config.fault.service_name, "autoops-lambda");
        assert_eq!(config.stress.window_secs, 10);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: ResponderConfig = toml::from_str("").expect("empty config");
        assert_eq!(config.stress.window_secs, 10);

        let config: ResponderConfig = toml::from_str(
            r#"
            [fault]
            fail_mode = true

            [stress]
            window_secs = 3
            "#,
        )
        .expect("partial config");
        assert!(config.fault.fail_mode);
        assert_eq!(config.stress.window_secs, 3);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
