//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (per-route counters and latency histograms)
//!
//! Consumers:
//!     → stdout log aggregation
//!     → Prometheus scrape of the exporter's own listener
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line on the hot path
//! - Metrics are cheap atomic updates; the exporter runs on a separate
//!   listener so a stress run cannot starve the scrape endpoint

pub mod logging;
pub mod metrics;
