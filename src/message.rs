// src/message.rs
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    // Absent and null both mean "". Any other JSON value is accepted.
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// Strings as sent; other values as their JSON text.
    pub fn message(&self) -> Cow<'_, str> {
        match &self.message {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }

    /// Nothing for the front end to display.
    pub fn silent() -> Self {
        Self { reply: String::new() }
    }
}
