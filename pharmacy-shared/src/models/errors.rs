use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend for non-2xx responses.
///
/// `detail` is a plain string for application errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// Raw `detail` payload.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Creates an error response carrying a plain message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(message.into())),
        }
    }

    /// Human readable message, if the payload carries one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }

    /// Message from `body`, or `fallback` when the body has none.
    #[must_use]
    pub fn message_or(body: &str, fallback: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|error| error.message())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{message}"),
            None => write!(f, "unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}
