//! AutoOps Fault-Injection Responder
//!
//! A deliberately breakable HTTP service for incident-simulation demos,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │            FAULT-INJECTION RESPONDER          │
//!                    │                                               │
//!   GET /            │  ┌─────────┐    ┌──────────┐                 │
//!   GET /stress ─────┼─▶│  http   │───▶│  fault   │── healthy text  │
//!   GET /error       │  │ server  │    │responder │── 500 on demand │
//!                    │  └─────────┘    └──────────┘                 │
//!                    │                                               │
//!   invoke(event,    │  ┌──────────┐   ┌──────────┐                 │
//!   context) ────────┼─▶│ function │──▶│  fault   │── JSON payload  │
//!                    │  │ handler  │   │responder │── invocation err│
//!                    │  └──────────┘   └──────────┘                 │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns            │ │
//!                    │  │  config │ observability │ lifecycle      │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The only branch that matters: FAIL_MODE=true (case-insensitive) makes
//! the health path fail with a synthetic error; everything else is healthy.

use std::path::Path;

use tokio::net::TcpListener;

use autoops_responder::config::{self, ResponderConfig};
use autoops_responder::fault::FailMode;
use autoops_responder::http::HttpServer;
use autoops_responder::lifecycle::Shutdown;
use autoops_responder::observability::{logging, metrics};

/// Optional path to a TOML config file.
const CONFIG_ENV_VAR: &str = "RESPONDER_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("autoops-responder v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults when no file is given)
    let mut config = match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => config::load_config(Path::new(&path))?,
        Err(_) => ResponderConfig::default(),
    };

    // FAIL_MODE in the environment wins over the config file
    if let Some(fail_mode) = FailMode::from_env() {
        config.fault.fail_mode = fail_mode.enabled();
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        fail_mode = config.fault.fail_mode,
        stress_window_secs = config.stress.window_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
