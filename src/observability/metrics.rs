//! Metrics collection and exposition.
//!
//! # Metrics
//! - `responder_requests_total` (counter): total requests by route, status
//! - `responder_request_duration_seconds` (histogram): latency by route
//!
//! # Design Decisions
//! - Prometheus exporter runs on its own listener, separate from the
//!   responder's port, so scrapes survive a stress run
//! - Recording is a no-op until the exporter is installed, which keeps
//!   handlers metric-agnostic in tests

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "responder_requests_total",
                "Total requests handled, by route and status code"
            );
            describe_histogram!(
                "responder_request_duration_seconds",
                "Request latency in seconds, by route"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    counter!(
        "responder_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "responder_request_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
