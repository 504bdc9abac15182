use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error, info,
    server::{GrantState, bind_api_server, serve_api_server},
    spotify::ApiClient,
    success,
    types::ImplicitGrant,
    warning,
};

const MAX_WAIT: Duration = Duration::from_secs(120);

/// Runs the implicit grant login.
///
/// Starts the local callback server, sends the browser to the authorization
/// page and waits for the page served at the redirect URI to report back. The
/// token is printed, not stored; put it in `SPOTIFY_API_TOKEN` to use it.
///
/// The redirect URI registered for the application has to point at
/// `http://<SERVER_ADDRESS>/callback` for the token to reach this process.
pub async fn login(client: &ApiClient) {
    let state: GrantState = Arc::new(Mutex::new(None));

    let addr = config::server_addr();
    let listener = match bind_api_server(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot start callback server on {}. Err: {}", addr, e),
    };

    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        if let Err(e) = serve_api_server(listener, server_state).await {
            warning!("Callback server stopped. Err: {}", e);
        }
    });

    if client.config().callback_url.is_none() {
        warning!("SPOTIFY_API_REDIRECT_URI is not set, the authorize URL will be incomplete.");
    }

    client.login();
    info!("Waiting for authorization in the browser...");

    match wait_for_grant(state).await {
        Some(ImplicitGrant {
            access_token: Some(token),
            expires_in,
            ..
        }) => {
            success!("Login successful!");
            info!("Access token: {}", token);
            if let Some(expires_in) = expires_in {
                info!("The token expires in {} seconds.", expires_in);
            }
            info!(
                "Set SPOTIFY_API_TOKEN in {} to use it.",
                config::env_path().display()
            );
        }
        Some(grant) => error!(
            "Authorization failed: {}",
            grant.error.unwrap_or_else(|| "unknown error".to_string())
        ),
        None => error!("Authorization failed or timed out."),
    }
}

/// Polls the shared state once a second until the callback stores a grant or
/// [`MAX_WAIT`] passes.
async fn wait_for_grant(state: GrantState) -> Option<ImplicitGrant> {
    let start = std::time::Instant::now();

    while start.elapsed() < MAX_WAIT {
        if let Some(grant) = state.lock().await.clone() {
            return Some(grant);
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
