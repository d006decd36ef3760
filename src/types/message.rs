//! Conversation message types
//!
//! Defines the `{role, content}` messages exchanged with the chat
//! completion endpoint. An ordered sequence forms a conversation; the
//! orchestrator treats position 0 as the system slot and position 1 as
//! the user slot.

use serde::{Deserialize, Serialize};

/// Speaker role within a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single conversation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Estimate token count for this message.
    ///
    /// Used for diagnostic logging only; the remote service does its own
    /// accounting.
    pub fn estimate_tokens(&self) -> usize {
        // Heuristic: 1 token ≈ 4 characters
        self.content.trim().chars().count() / 4
    }
}
