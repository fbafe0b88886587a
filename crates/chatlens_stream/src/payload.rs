//! Defensive decoding of SSE payloads from the code-generation endpoint.
//!
//! The endpoint is loose about data shapes: `message` events carry either a
//! JSON envelope (`{"d": "chunk"}`), a JSON string, or a bare string. A
//! terminal `done` event closes the stream and a `business-error` event
//! carries a structured refusal (rate limit, permissions, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StreamError};

/// Structured error delivered on the `business-error` SSE event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessError {
    pub error: bool,
    pub code: i64,
    pub message: String,
}

/// One decoded event from the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Incremental content chunk, already unwrapped from its envelope.
    Message { data: String },
    /// Stream finished normally; `data` is whatever the done event carried.
    Done { data: String },
    /// Backend refused or aborted the stream.
    BusinessError(BusinessError),
}

impl StreamEvent {
    /// Classify a raw SSE event by name. An unnamed event is `message`
    /// (EventSource default).
    pub fn from_sse(event: &str, data: &str) -> Result<Self> {
        match event {
            "" | "message" => Ok(StreamEvent::Message {
                data: decode_chunk(data),
            }),
            "done" => Ok(StreamEvent::Done {
                data: decode_chunk(data),
            }),
            "business-error" => Ok(StreamEvent::BusinessError(serde_json::from_str(data)?)),
            other => Err(StreamError::UnknownEvent(other.to_string())),
        }
    }
}

/// Extract chunk text from an SSE data field.
///
/// A JSON string is the chunk; a JSON object contributes its `"d"` field
/// (missing or null -> empty); any other JSON value is empty; data that is
/// not JSON at all is taken verbatim.
pub fn decode_chunk(data: &str) -> String {
    match serde_json::from_str::<Value>(data) {
        Ok(Value::String(s)) => s,
        Ok(Value::Object(map)) => match map.get("d") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        },
        Ok(_) => String::new(),
        Err(_) => {
            tracing::debug!("non-JSON chunk payload, keeping verbatim");
            data.to_string()
        }
    }
}
