use serde::{Deserialize, Serialize};

use super::Message;

pub const DEFAULT_MODEL: &str = "claude-3-opus-20240229";
const DEFAULT_MAX_TOKENS: i64 = 4096;
const DEFAULT_TEMPERATURE: f64 = 0.7;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_max_tokens() -> Option<i64> {
    Some(DEFAULT_MAX_TOKENS)
}
fn default_temperature() -> Option<f64> {
    Some(DEFAULT_TEMPERATURE)
}
fn default_stream() -> Option<bool> {
    Some(false)
}

/// Inbound chat-completion request.
///
/// Sampling fields are accepted and kept but never range-checked: a
/// temperature of 9.0 or a negative `max_tokens` decodes fine.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<i64>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f64>,
    #[serde(default = "default_stream")]
    pub stream: Option<bool>,
}

impl ChatRequest {
    #[cfg(test)]
    pub fn new(model: String, messages: Vec<Message>) -> Self {
        ChatRequest {
            messages,
            model,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            stream: default_stream(),
        }
    }

    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
