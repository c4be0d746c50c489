//! AutoOps Fault-Injection Responder Library

pub mod config;
pub mod fault;
pub mod function;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ResponderConfig;
pub use fault::{FailMode, Responder};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
