//! Wire models for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use empath_core::EmotionLabel;

/// Session identifier used when the client sends none.
pub const DEFAULT_SESSION_ID: &str = "default_session";

/// Parsed chat request.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// The user's message, whitespace-trimmed. May be empty.
    pub text: String,
    /// Client session identifier. Echoed in logs only; no state is kept.
    pub session_id: String,
}

impl ChatRequest {
    /// Lenient body parse.
    ///
    /// Malformed JSON is treated as an empty object rather than a request
    /// failure, and scalar field values are coerced to strings.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let text = coerce_string(value.get("text"))
            .unwrap_or_default()
            .trim()
            .to_string();
        let session_id = coerce_string(value.get("session_id"))
            .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());
        Self { text, session_id }
    }
}

fn coerce_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Successful chat response body.
///
/// `scores` and `history` are always empty; they exist for wire
/// compatibility with the original API shape.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub emotion: EmotionLabel,
    pub scores: Map<String, Value>,
    pub reply: String,
    pub history: Vec<Value>,
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/hello` response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub greeting: String,
}
