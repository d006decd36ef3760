//! JSON-over-HTTP transport capability
//!
//! Both pipeline clients consume the same opaque capability: POST a JSON
//! body, get the JSON response body back. Production code uses the
//! reqwest-backed [`HttpTransport`]; tests substitute a scripted impl.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::Result;

/// Request timeout (30 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a JSON body and returns the decoded JSON response body.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value>;
}

/// reqwest-backed transport sharing a single connection pool
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonTransport for HttpTransport {
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: &Value) -> Result<Value> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        // Service-level status lives in the response body; the HTTP status
        // line is not authoritative for the pipeline endpoint.
        let value = response.json::<Value>().await?;
        Ok(value)
    }
}
