use tracing::{debug, warn};

use super::{ApiClient, SPOTIFY_AUTH_URL};
use crate::utils::encode_component;

/// Sends the user agent to a URL. The login redirect goes through this.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str) -> std::io::Result<()>;
}

impl std::fmt::Debug for dyn Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator").finish()
    }
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

impl ApiClient {
    /// Builds the implicit grant authorization URL from the current config.
    ///
    /// The client id is appended as-is; scopes and callback URL are
    /// percent-encoded. The `scope` parameter is left out when no scopes are
    /// set. Unset values render empty rather than failing.
    ///
    /// ```text
    /// https://accounts.spotify.com/authorize?response_type=token&client_id=abc&scope=playlist-read&redirect_uri=https%3A%2F%2Fapp%2Fcb
    /// ```
    pub fn authorize_url(&self) -> String {
        let config = &self.config;
        let mut url = format!(
            "{auth_url}?response_type=token&client_id={client_id}",
            auth_url = SPOTIFY_AUTH_URL,
            client_id = config.client_id.as_deref().unwrap_or_default()
        );
        if let Some(scopes) = config.scopes.as_deref().filter(|s| !s.is_empty()) {
            url.push_str("&scope=");
            url.push_str(&encode_component(scopes));
        }
        url.push_str("&redirect_uri=");
        url.push_str(&encode_component(
            config.callback_url.as_deref().unwrap_or_default(),
        ));
        url
    }

    /// Redirects the user to the Spotify authorization page.
    ///
    /// Fire-and-forget: if the navigator fails, the URL is logged so it can be
    /// opened by hand.
    pub fn login(&self) {
        let url = self.authorize_url();
        debug!(url = %url, "redirecting to authorization page");
        if let Err(e) = self.navigator.navigate(&url) {
            warn!("Could not open browser ({e}). Please visit:\n{url}");
        }
    }
}
