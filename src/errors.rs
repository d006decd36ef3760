//! Error types for the ragpipe request pipeline
//!
//! Every failure cause the pipeline can produce is a distinct variant, so
//! callers and tests can tell a transport failure from a service rejection
//! or a degenerate empty-choices response.

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum RagError {
    /// Caller-supplied input rejected before any network activity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors (e.g. an unresolvable completion URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote service responded but signalled failure in its own body
    #[error("search pipeline error code {code} for query \"{query}\": {message}")]
    Service {
        code: i64,
        query: String,
        message: String,
    },

    /// Retrieval short-circuit: the cause is logged, not chained
    #[error("retrieval with the search pipeline failed")]
    RetrievalFailed,

    /// Completion responded without error but carried zero choices
    #[error("chat completion request returned no choices")]
    EmptyChoices,

    /// Generic errors with context
    #[error("Pipeline error: {0}")]
    Generic(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, RagError>;

/// Convert anyhow errors to RagError
impl From<anyhow::Error> for RagError {
    fn from(err: anyhow::Error) -> Self {
        RagError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = RagError::Service {
            code: 500,
            query: "what is vllm".to_string(),
            message: "pipeline not found".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("what is vllm"));
        assert!(err.to_string().contains("pipeline not found"));
    }

    #[test]
    fn test_retrieval_failed_is_unchained() {
        let err = RagError::RetrievalFailed;
        assert_eq!(
            err.to_string(),
            "retrieval with the search pipeline failed"
        );
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: RagError = anyhow::anyhow!("upstream broke").into();
        assert!(matches!(err, RagError::Generic(_)));
        assert!(err.to_string().contains("upstream broke"));
    }
}
