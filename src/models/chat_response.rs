use serde::{Deserialize, Serialize};

use super::{chat_request::ChatRequest, Choice, Message, Usage, ASSISTANT_ROLE};
use crate::utils::{prefixed_token, unix_timestamp};

pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";
pub const CHAT_COMPLETION_ID_PREFIX: &str = "chatcmpl-";
pub const PLACEHOLDER_CONTENT: &str = "This is a test response from MCP server";
const FINISH_REASON_STOP: &str = "stop";

// response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatResponse {
    pub fn new(
        id: String,
        object: String,
        created: i64,
        model: String,
        choices: Vec<Choice>,
        usage: Usage,
    ) -> Self {
        ChatResponse {
            id,
            object,
            created,
            model,
            choices,
            usage,
        }
    }

    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Answers any chat request with the fixed placeholder completion.
///
/// Only `model` is read from the request. Token usage is reported as zero.
pub fn build_chat_completion(request: &ChatRequest) -> ChatResponse {
    let choice = Choice {
        index: 0,
        message: Message {
            role: ASSISTANT_ROLE.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
        },
        finish_reason: FINISH_REASON_STOP.to_string(),
    };

    ChatResponse::new(
        prefixed_token(CHAT_COMPLETION_ID_PREFIX),
        CHAT_COMPLETION_OBJECT.to_string(),
        unix_timestamp(),
        request.model.clone(),
        vec![choice],
        Usage::default(),
    )
}
