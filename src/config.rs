//! Configuration management for the spotify-rg client.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Variables already present in the process
//! environment take priority over the file.
//!
//! None of the client settings are required up front. An unset client id,
//! callback URL or token simply produces an unauthenticated request or a
//! malformed authorize URL later on.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

/// Default bind address for the local callback server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Client settings read by [`crate::spotify::ApiClient`] at call time.
///
/// Every field is optional and stored exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: Option<String>,
    pub callback_url: Option<String>,
    pub scopes: Option<String>,
    pub token: Option<String>,
}

impl ClientConfig {
    /// Reads the four client settings from the environment.
    ///
    /// Call [`load_env`] first if the `.env` file should be considered.
    pub fn from_env() -> Self {
        Self {
            client_id: spotify_client_id(),
            callback_url: spotify_redirect_uri(),
            scopes: spotify_scope(),
            token: spotify_token(),
        }
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `spotify-rg` directory if it doesn't exist. A missing `.env`
/// file is not an error, since every setting can also come from the process
/// environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-rg/.env`
/// - macOS: `~/Library/Application Support/spotify-rg/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-rg/.env`
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists but
/// cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Path of the `.env` file [`load_env`] reads.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-rg/.env");
    path
}

/// Returns the bind address for the local callback server.
///
/// Reads `SERVER_ADDRESS`, falling back to [`DEFAULT_SERVER_ADDRESS`].
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify application client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").ok()
}

/// Returns the redirect URI registered for the application
/// (`SPOTIFY_API_REDIRECT_URI`).
pub fn spotify_redirect_uri() -> Option<String> {
    env::var("SPOTIFY_API_REDIRECT_URI").ok()
}

/// Returns the space separated scopes to request on login
/// (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_SCOPE").ok()
}

/// Returns the bearer token used for API calls (`SPOTIFY_API_TOKEN`).
pub fn spotify_token() -> Option<String> {
    env::var("SPOTIFY_API_TOKEN").ok()
}

/// Returns the tracing filter directive (`SPOTIFY_RG_LOG`), defaulting to `warn`.
pub fn log_filter() -> String {
    env::var("SPOTIFY_RG_LOG").unwrap_or_else(|_| "warn".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = ClientConfig::default();
        assert!(config.client_id.is_none());
        assert!(config.callback_url.is_none());
        assert!(config.scopes.is_none());
        assert!(config.token.is_none());
    }

    #[test]
    fn env_path_ends_in_crate_dir() {
        assert!(env_path().ends_with("spotify-rg/.env"));
    }
}
