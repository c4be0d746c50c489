//! Serverless function variant of the responder.
//!
//! # Data Flow
//! ```text
//! runtime event + invocation context
//!     → handler.rs (delegates the branch to Responder::health)
//!     → FunctionResponse { statusCode, headers, body } on the healthy path
//!     → FaultError::Synthetic propagated as an invocation error otherwise
//! ```

pub mod handler;

pub use handler::{handle, FunctionResponse, InvocationContext};
