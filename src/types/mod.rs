//! Type definitions module
//!
//! Shared data contracts for the request pipeline.

pub mod message;
pub mod mode;

// Re-export commonly used types
pub use message::{Message, Role};
pub use mode::AiMode;
