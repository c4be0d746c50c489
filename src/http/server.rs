//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three responder routes
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ResponderConfig;
use crate::fault::{FailMode, Responder};
use crate::http::handlers;
use crate::lifecycle::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// The fault-injection responder, shared across requests.
    pub responder: Arc<Responder>,

    /// Flag resolved at startup and handed to every health call.
    pub fail_mode: FailMode,
}

impl AppState {
    pub fn new(config: &ResponderConfig, fail_mode: FailMode) -> Self {
        Self {
            responder: Arc::new(Responder::from_config(config)),
            fail_mode,
        }
    }
}

/// HTTP server for the fault-injection responder.
pub struct HttpServer {
    router: Router,
    config: ResponderConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration. The fail-mode
    /// flag comes from the config; any environment override is applied by
    /// the caller before construction.
    pub fn new(config: ResponderConfig) -> Self {
        let state = AppState::new(&config, FailMode::from(config.fault.fail_mode));
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ResponderConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/stress", get(handlers::stress))
            .route("/error", get(handlers::error_trigger))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires or Ctrl+C arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            fail_mode = self.config.fault.fail_mode,
            stress_window_secs = self.config.stress.window_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }
}
