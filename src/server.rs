use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    api,
    error::{Error, Result},
    types::ImplicitGrant,
};

/// Shared slot the `/token` handler fills and the login command polls.
pub type GrantState = Arc<Mutex<Option<ImplicitGrant>>>;

/// Routes of the local callback server.
pub fn router(state: GrantState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/token", get(api::token).layer(Extension(state)))
}

/// Parses and binds the callback server address.
pub async fn bind_api_server(addr: &str) -> Result<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| Error::Config(format!("Failed to parse server address {addr}: {e}")))?;

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "callback server listening");
    Ok(listener)
}

/// Serves [`router`] on `listener` until the task is dropped.
pub async fn serve_api_server(listener: TcpListener, state: GrantState) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
