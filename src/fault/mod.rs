//! Fault-injection subsystem.
//!
//! # Data Flow
//! ```text
//! FAIL_MODE env / config file
//!     → FailMode (parsed once at startup)
//!     → Responder::health (branch: healthy payload | synthetic failure)
//!
//! GET /stress → Responder::stress (bounded busy-wait)
//! GET /error  → Responder::error  (deterministic divide-by-zero)
//! ```
//!
//! # Design Decisions
//! - FailMode is injected into callers, never re-read from the environment
//!   in the hot path; tests exercise the failure branch without touching
//!   process state
//! - Faults are typed Results so the hosting layer maps them to status codes
//! - Exactly one log emission per health call, severity follows the branch

pub mod responder;
pub mod types;

pub use responder::Responder;
pub use types::{FailMode, FaultError, FaultResult, HealthResponse};
