//! # Spotify Web API client
//!
//! [`ApiClient`] maps one method to one Web API endpoint. Every call builds the
//! endpoint path, attaches a bearer token, forwards the request to an
//! [`HttpTransport`] and decodes the JSON body into a typed response.
//!
//! ```text
//! CLI / host application
//!          ↓
//! ApiClient (path building, headers, decoding)
//!     ├── albums     /albums, /albums/{id}/tracks
//!     ├── artists    /artists, /artists/{id}/albums, /artists/{id}/top-tracks
//!     ├── tracks     /tracks, /me/top/tracks, /recommendations
//!     ├── playlists  /users/{id}/playlists, /me/playlists, /playlists/{id}/tracks
//!     ├── search     /search
//!     └── auth       implicit grant redirect to accounts.spotify.com
//!          ↓
//! HttpTransport (reqwest by default)
//! ```
//!
//! The client has no retry, rate limit, pagination or caching logic. Whatever
//! the transport reports is handed back to the caller unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = ApiClient::builder().token("BQC...").build();
//! let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//! ```

pub mod albums;
pub mod artists;
pub mod auth;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod transport;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

pub use auth::{BrowserNavigator, Navigator};
pub use transport::{Headers, HttpTransport, ReqwestTransport};

use crate::{config::ClientConfig, error::Result};

/// Base URL of the Spotify Web API.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Authorization endpoint the login redirect points at.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Thin Spotify Web API client.
///
/// Configuration is read at call time, so a token set between two calls is
/// used by the second one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    navigator: Arc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Creates a client with an empty configuration, the reqwest transport and
    /// the system browser as navigator.
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Creates a client from an existing configuration, e.g. [`ClientConfig::from_env`].
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: SPOTIFY_API_URL.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
            navigator: Arc::new(BrowserNavigator),
        }
    }

    /// Starts a builder with an empty configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Sets the application client id used by [`ApiClient::authorize_url`].
    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.config.client_id = Some(client_id.into());
    }

    /// Sets the redirect URI sent with the login redirect.
    pub fn set_callback_url(&mut self, callback_url: impl Into<String>) {
        self.config.callback_url = Some(callback_url.into());
    }

    /// Sets the space separated scopes requested at login.
    pub fn set_scopes(&mut self, scopes: impl Into<String>) {
        self.config.scopes = Some(scopes.into());
    }

    /// Sets the bearer token. The next request uses it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = Some(token.into());
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request, built from the current token.
    ///
    /// An unset token still produces the `Bearer ` prefix.
    pub fn headers(&self) -> Headers {
        vec![
            (
                "Authorization",
                format!("Bearer {}", self.config.token.as_deref().unwrap_or_default()),
            ),
            ("Accept", "application/json".to_string()),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    async fn api_get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let value = self.transport.get(&url, params, &self.headers()).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn api_post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let body = serde_json::to_value(body)?;
        let value = self.transport.post(&url, &body, &self.headers()).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    config: ClientConfig,
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
    /// Replaces the whole configuration. Later setters override its fields.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// See [`ApiClient::set_client_id`].
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(client_id.into());
        self
    }

    /// See [`ApiClient::set_callback_url`].
    pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.config.callback_url = Some(callback_url.into());
        self
    }

    /// See [`ApiClient::set_scopes`].
    pub fn scopes(mut self, scopes: impl Into<String>) -> Self {
        self.config.scopes = Some(scopes.into());
        self
    }

    /// See [`ApiClient::set_token`].
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Overrides the API base URL, e.g. to point at a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replaces the reqwest transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Replaces the system browser used by [`ApiClient::login`].
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Arc::new(navigator));
        self
    }

    /// Builds the client, defaulting to the public API, reqwest and the system browser.
    pub fn build(self) -> ApiClient {
        ApiClient {
            config: self.config,
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| SPOTIFY_API_URL.to_string()),
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(ReqwestTransport::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(BrowserNavigator)),
        }
    }
}

/// Recording transport and navigator shared by the endpoint tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use super::{ApiClient, Headers, HttpTransport, Navigator};
    use crate::error::Result;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub method: &'static str,
        pub url: String,
        pub params: Vec<(String, String)>,
        pub headers: Headers,
        pub body: Option<Value>,
    }

    #[derive(Clone, Default)]
    pub struct RecordingTransport {
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub response: Arc<Mutex<Value>>,
    }

    impl RecordingTransport {
        pub fn responding(response: Value) -> Self {
            Self {
                calls: Arc::default(),
                response: Arc::new(Mutex::new(response)),
            }
        }

        pub fn last(&self) -> Call {
            self.calls.lock().unwrap().last().cloned().expect("no call recorded")
        }
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn get(&self, url: &str, params: &[(String, String)], headers: &Headers) -> Result<Value> {
            self.calls.lock().unwrap().push(Call {
                method: "GET",
                url: url.to_string(),
                params: params.to_vec(),
                headers: headers.clone(),
                body: None,
            });
            Ok(self.response.lock().unwrap().clone())
        }

        async fn post(&self, url: &str, body: &Value, headers: &Headers) -> Result<Value> {
            self.calls.lock().unwrap().push(Call {
                method: "POST",
                url: url.to_string(),
                params: Vec::new(),
                headers: headers.clone(),
                body: Some(body.clone()),
            });
            Ok(self.response.lock().unwrap().clone())
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        pub visited: Arc<Mutex<Vec<String>>>,
        pub fail: bool,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) -> std::io::Result<()> {
            self.visited.lock().unwrap().push(url.to_string());
            if self.fail {
                return Err(std::io::Error::other("no browser"));
            }
            Ok(())
        }
    }

    pub fn client_with(transport: &RecordingTransport) -> ApiClient {
        ApiClient::builder()
            .token("tok")
            .transport(transport.clone())
            .build()
    }

    pub fn url(endpoint: &str) -> String {
        format!("{}{}", super::SPOTIFY_API_URL, endpoint)
    }
}
