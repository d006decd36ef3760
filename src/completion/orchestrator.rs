//! RAG completion orchestrator
//!
//! Execution order is strictly sequential: retrieve, augment, complete.
//! Retrieval failure aborts the request before any completion attempt; no
//! retries, no fallback to an unaugmented completion.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use crate::completion::wire::{ChatRequest, ChatResponse};
use crate::config::RagConfig;
use crate::errors::{RagError, Result};
use crate::retrieval::PipelineClient;
use crate::transport::JsonTransport;
use crate::types::{AiMode, Message};

/// System instruction installed in slot 0, replacing whatever the caller
/// supplied.
pub const SYSTEM_PROMPT: &str = "Human: You are an AI assistant. You are able to find answers to the questions from the contextual passage snippets provided.";

/// Passages requested per question
pub const RETRIEVAL_TOP_K: usize = 3;

/// Interpolate retrieved passages and the raw question into the prompt
/// template. Passages are joined by a single space.
fn augmented_user_prompt(passages: &[String], raw_query: &str) -> String {
    format!(
        "Use the following pieces of information enclosed in <context> tags to provide an answer to the question enclosed in <question> tags.\n<context>\n{}\n</context>\n<question>\n{}\n</question>",
        passages.join(" "),
        raw_query
    )
}

/// Result of a completed exchange: the augmented conversation that was
/// sent, plus the model's reply. The caller's input conversation is never
/// touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub messages: Vec<Message>,
    pub reply: Message,
}

/// Drives one retrieve-augment-complete round trip per invocation.
/// Read-only after construction, safe for concurrent use.
pub struct Orchestrator {
    config: RagConfig,
    retrieval: PipelineClient,
    transport: Arc<dyn JsonTransport>,
}

impl Orchestrator {
    pub fn new(config: RagConfig, transport: Arc<dyn JsonTransport>) -> Self {
        let retrieval = PipelineClient::new(&config, Arc::clone(&transport));
        Self {
            config,
            retrieval,
            transport,
        }
    }

    /// Run the full pipeline for a conversation of at least two messages:
    /// slot 0 is the system slot, slot 1 holds the user question.
    ///
    /// Returns the augmented conversation plus the first choice of the
    /// completion. Slot 0 is unconditionally replaced with the fixed
    /// system instruction; slot 1 is rewritten around the retrieved
    /// passages on the retrieval-success path only.
    pub async fn complete(&self, conversation: &[Message], mode: AiMode) -> Result<Exchange> {
        if conversation.len() < 2 {
            return Err(RagError::InvalidInput(
                "conversation must hold a system and a user message".to_string(),
            ));
        }

        let mut messages = conversation.to_vec();
        messages[0] = Message::system(SYSTEM_PROMPT);

        // Capture the raw question before any rewriting.
        let raw_query = conversation[1].content.clone();

        let passages = match self.retrieval.retrieve(&raw_query, RETRIEVAL_TOP_K).await {
            Ok(passages) => passages,
            Err(err) => {
                // The cause stays in the logs; callers get the generic
                // retrieval failure.
                error!(error = %err, "retrieval failed, aborting completion");
                return Err(RagError::RetrievalFailed);
            }
        };
        messages[1] = Message::user(augmented_user_prompt(&passages, &raw_query));

        // Configuration is checked before any network call.
        let url = self.config.completion_url()?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: mode,
            top_p: 1,
            frequency_penalty: 0,
            presence_penalty: 0,
        };
        let prompt_tokens: usize = request
            .messages
            .iter()
            .map(Message::estimate_tokens)
            .sum();
        let body = serde_json::to_value(&request)?;
        debug!(%url, mode = %mode, prompt_tokens, request = %body, "sending chat completion request");

        let bearer = self.config.openai_api_key.as_deref();
        let raw: Value = match self.transport.post_json(&url, bearer, &body).await {
            Ok(raw) => raw,
            Err(err) => {
                error!(request = %body, error = %err, "chat completion request failed");
                return Err(err);
            }
        };

        let response: ChatResponse = match serde_json::from_value(raw) {
            Ok(response) => response,
            Err(err) => {
                error!(request = %body, error = %err, "chat completion response could not be decoded");
                return Err(err.into());
            }
        };

        let Some(choice) = response.choices.into_iter().next() else {
            error!(id = %response.id, "chat completion returned no choices");
            return Err(RagError::EmptyChoices);
        };

        Ok(Exchange {
            messages: request.messages,
            reply: choice.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_template_delimiters() {
        let passages = vec!["first.".to_string(), "second.".to_string()];
        let prompt = augmented_user_prompt(&passages, "what is vllm");

        assert!(prompt.contains("<context>\nfirst. second.\n</context>"));
        assert!(prompt.contains("<question>\nwhat is vllm\n</question>"));
    }

    #[test]
    fn test_prompt_template_empty_passages() {
        let prompt = augmented_user_prompt(&[], "what is vllm");
        assert!(prompt.contains("<context>\n\n</context>"));
        assert!(prompt.contains("what is vllm"));
    }
}
