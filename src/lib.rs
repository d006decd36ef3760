//! ragpipe - retrieval-augmented chat completion pipeline
//!
//! Given a two-message conversation (system + user), ragpipe retrieves
//! relevant passages from a Zilliz Cloud Pipelines search endpoint,
//! interpolates them into a templated prompt, and forwards the augmented
//! conversation to an OpenAI-compatible chat completion endpoint.
//!
//! # Architecture
//!
//! - [`retrieval`]: search client for the managed vector pipeline
//! - [`completion`]: prompt construction and completion orchestration
//! - [`transport`]: the JSON-over-HTTP capability both clients consume

pub mod completion;
pub mod config;
pub mod errors;
pub mod retrieval;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use completion::{Exchange, Orchestrator};
pub use config::RagConfig;
pub use errors::{RagError, Result};
pub use retrieval::PipelineClient;
pub use transport::{HttpTransport, JsonTransport};
pub use types::{AiMode, Message, Role};
