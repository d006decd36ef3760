//! Chat completion orchestration
//!
//! Owns prompt construction: overrides the system slot, augments the user
//! question with retrieved passages, and forwards the conversation to an
//! OpenAI-compatible chat completion endpoint.

pub mod orchestrator;
pub mod wire;

pub use orchestrator::{Exchange, Orchestrator};
pub use wire::{ChatRequest, ChatResponse, Choice};
