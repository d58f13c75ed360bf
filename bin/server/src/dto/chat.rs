use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound chat request body.
///
/// `message` is kept as a raw JSON value so that a missing field or a
/// non-string value produces the API's own 400 envelope instead of a
/// framework rejection; the handler checks both.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

/// Successful chat payload: the original message, the assistant's
/// reply, and the handling timestamp.
#[derive(Debug, Serialize)]
pub struct ChatData {
    pub message: String,
    pub response: String,
    pub timestamp: String,
}
