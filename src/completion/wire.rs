//! Wire contracts for `POST {api_base}/chat/completions`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{AiMode, Message};

/// Request body for the chat completion endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    /// Serialized as the preset's bare temperature value
    pub temperature: AiMode,
    pub top_p: u32,
    pub frequency_penalty: u32,
    pub presence_penalty: u32,
}

/// A single choice in the completion response
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub finish_reason: String,
}

/// Response body for the chat completion endpoint.
///
/// Deserialization is tolerant: only `choices` drives control flow, the
/// rest is diagnostic.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Value,
}
