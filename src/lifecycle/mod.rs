//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C or Shutdown::trigger
//!     → shutdown_signal future resolves
//!     → server stops accepting, drains in-flight requests, exits
//! ```
//!
//! # Design Decisions
//! - One broadcast channel serves both tests (trigger) and signals (Ctrl+C)
//! - An in-flight stress run still completes; the window is short by
//!   validation, so drain time is bounded

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
