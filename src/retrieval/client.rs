//! Zilliz Cloud Pipelines search client
//!
//! Issues a search query against a cloud-hosted retrieval pipeline and
//! returns the matching text passages in service-defined relevance order.
//! Endpoint: `POST https://controller.api.{region}.zillizcloud.com/v1/pipelines/{id}/run`
//!
//! The service signals success via `code == 200` in the response body,
//! regardless of the HTTP status line.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::RagConfig;
use crate::errors::{RagError, Result};
use crate::transport::JsonTransport;

/// Fields requested from the pipeline for every hit
const OUTPUT_FIELDS: [&str; 3] = ["chunk_text", "chunk_id", "doc_name"];

#[derive(Debug, Clone, Serialize)]
struct QueryData {
    query_text: String,
}

#[derive(Debug, Clone, Serialize)]
struct SearchParams {
    limit: usize,
    offset: usize,
    #[serde(rename = "outputFields")]
    output_fields: Vec<String>,
}

/// Request body for the pipeline run endpoint
#[derive(Debug, Clone, Serialize)]
struct SearchRequest {
    data: QueryData,
    params: SearchParams,
}

/// A single search hit. Only `chunk_text` is consumed downstream; the
/// remaining fields are diagnostic.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievedPassage {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub doc_name: String,
    #[serde(default)]
    pub chunk_id: i64,
    #[serde(default)]
    pub chunk_text: String,
}

/// Embedding/rerank cost counters, pass-through only
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsage {
    #[serde(default)]
    pub embedding: i64,
    #[serde(default)]
    pub rerank: i64,
}

/// Result payload of a successful search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub result: Vec<RetrievedPassage>,
    #[serde(default)]
    pub usage: SearchUsage,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: SearchData,
}

/// Client for a single configured pipeline. Read-only after construction,
/// safe for concurrent invocations.
pub struct PipelineClient {
    region: String,
    api_key: String,
    pipeline_id: String,
    transport: Arc<dyn JsonTransport>,
}

impl PipelineClient {
    pub fn new(config: &RagConfig, transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            region: config.zilliz_region.clone(),
            api_key: config.zilliz_api_key.clone(),
            pipeline_id: config.zilliz_pipeline_id.clone(),
            transport,
        }
    }

    /// Endpoint URL for this pipeline
    pub fn endpoint(&self) -> String {
        format!(
            "https://controller.api.{}.zillizcloud.com/v1/pipelines/{}/run",
            self.region, self.pipeline_id
        )
    }

    /// Run a search and return the full result payload, usage counters
    /// included.
    pub async fn search(&self, query: &str, top_k: usize) -> Result<SearchData> {
        if query.trim().is_empty() {
            return Err(RagError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }
        if top_k == 0 {
            return Err(RagError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }

        info!(top_k, "running pipeline search");
        let request = SearchRequest {
            data: QueryData {
                query_text: query.to_string(),
            },
            params: SearchParams {
                limit: top_k,
                offset: 0,
                output_fields: OUTPUT_FIELDS.iter().map(|f| f.to_string()).collect(),
            },
        };
        let body = serde_json::to_value(&request)?;
        let url = self.endpoint();
        debug!(%url, request = %body, "pipeline search request");

        // Early return on transport failure: the body must never be decoded
        // after a failed request.
        let raw: Value = match self
            .transport
            .post_json(&url, Some(self.api_key.as_str()), &body)
            .await {
            Ok(raw) => raw,
            Err(err) => {
                error!(request = %body, error = %err, "pipeline request failed");
                return Err(err);
            }
        };

        let response: SearchResponse = match serde_json::from_value(raw) {
            Ok(response) => response,
            Err(err) => {
                error!(request = %body, error = %err, "pipeline response could not be decoded");
                return Err(err.into());
            }
        };

        if response.code != 200 {
            let err = RagError::Service {
                code: response.code,
                query: query.to_string(),
                message: response.message,
            };
            error!(request = %body, error = %err, "pipeline search rejected");
            return Err(err);
        }

        Ok(response.data)
    }

    /// Retrieve the chunk texts for a query, in service-returned order.
    /// This is the projection the completion orchestrator consumes.
    pub async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<String>> {
        let data = self.search(query, top_k).await?;
        Ok(data.result.into_iter().map(|hit| hit.chunk_text).collect())
    }
}
