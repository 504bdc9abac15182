use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Header name/value pairs attached to one request.
pub type Headers = Vec<(&'static str, String)>;

impl std::fmt::Debug for dyn HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

/// Generic HTTP capability the [`super::ApiClient`] forwards to.
///
/// Implementations resolve to the decoded JSON body. Any failure, including a
/// non-2xx status, is returned as-is.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, params: &[(String, String)], headers: &Headers) -> Result<Value>;

    async fn post(&self, url: &str, body: &Value, headers: &Headers) -> Result<Value>;
}

/// [`HttpTransport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport reusing an existing client, e.g. one with custom timeouts.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(String, String)], headers: &Headers) -> Result<Value> {
        debug!(url, "GET");
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await?.error_for_status()?;
        decode_body(response).await
    }

    async fn post(&self, url: &str, body: &Value, headers: &Headers) -> Result<Value> {
        debug!(url, "POST");
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.json(body).send().await?.error_for_status()?;
        decode_body(response).await
    }
}

async fn decode_body(response: reqwest::Response) -> Result<Value> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
