use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{RagError, Result};

/// Pipeline configuration: read-only after construction, safe to share
/// across concurrent invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Zilliz Cloud region, e.g. "gcp-us-west1"
    pub zilliz_region: String,
    /// Bearer credential for the pipeline endpoint
    pub zilliz_api_key: String,
    /// Pipeline identifier, e.g. "pipe-xxxx"
    pub zilliz_pipeline_id: String,
    /// Chat completion model id
    pub model: String,
    /// Max-token budget for the completion
    pub max_tokens: u32,
    /// Base URL of the OpenAI-compatible API, e.g. "https://api.openai.com/v1"
    #[serde(default)]
    pub api_base: String,
    /// Bearer credential for the completion endpoint, if it requires one
    #[serde(default)]
    pub openai_api_key: Option<String>,
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: RagConfig = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Resolve the chat completion URL from the configured base.
    ///
    /// An empty base is a configuration error, caught before any network
    /// call is attempted.
    pub fn completion_url(&self) -> Result<String> {
        let base = self.api_base.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(RagError::Config(
                "chat completion URL could not be resolved: api_base is empty".to_string(),
            ));
        }
        Ok(format!("{}/chat/completions", base))
    }
}
