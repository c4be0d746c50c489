//! Function handler for serverless-style invocation.
//!
//! # Responsibilities
//! - Accept the runtime's event payload (unused by contract) and context
//! - Return a structured response with status code, headers and JSON body
//! - Let injected faults propagate to the runtime as invocation errors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fault::{FailMode, FaultResult, Responder};

/// Correlation data supplied by the hosting runtime per invocation.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Invocation-correlation identifier (the runtime's request id).
    pub request_id: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Context with a fresh UUID, for invoking the handler outside a
    /// hosting runtime (local demos).
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Structured response returned to the runtime on the healthy path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    pub headers: HashMap<String, String>,

    /// JSON-serialized healthy payload.
    pub body: String,
}

/// Handle one invocation.
///
/// The event payload is accepted but unused; it is part of the invocation
/// contract, not of the branch. A synthetic failure propagates to the
/// caller, which surfaces it as an invocation error — never as a 200.
pub fn handle(
    _event: &Value,
    context: &InvocationContext,
    fail_mode: FailMode,
    responder: &Responder,
) -> FaultResult<FunctionResponse> {
    let health = responder.health(fail_mode, &context.request_id)?;

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    Ok(FunctionResponse {
        status_code: 200,
        headers,
        // HealthResponse serializes infallibly (strings only).
        body: serde_json::to_string(&health).unwrap_or_default(),
    })
}
