use std::sync::Arc;

use spotify_rg::{
    Error,
    server::{GrantState, bind_api_server, serve_api_server},
};
use tokio::sync::Mutex;

async fn spawn_server() -> (String, GrantState) {
    let state: GrantState = Arc::new(Mutex::new(None));
    let listener = bind_api_server("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        serve_api_server(listener, server_state).await.unwrap();
    });

    (base, state)
}

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let taken = bind_api_server("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let err = bind_api_server(&addr).await.unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn bind_rejects_malformed_address() {
    let err = bind_api_server("localhost").await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn health_reports_version() {
    let (base, _) = spawn_server().await;

    let body: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn callback_page_forwards_fragment() {
    let (base, _) = spawn_server().await;

    let page = reqwest::get(format!("{base}/callback"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("window.location.hash"));
    assert!(page.contains("/token?"));
}

#[tokio::test]
async fn token_endpoint_stores_grant() {
    let (base, state) = spawn_server().await;

    let page = reqwest::get(format!(
        "{base}/token?access_token=BQC123&token_type=Bearer&expires_in=3600"
    ))
    .await
    .unwrap()
    .text()
    .await
    .unwrap();

    assert!(page.contains("Login successful"));
    let grant = state.lock().await.clone().expect("grant stored");
    assert_eq!(grant.access_token.as_deref(), Some("BQC123"));
    assert_eq!(grant.token_type.as_deref(), Some("Bearer"));
    assert_eq!(grant.expires_in.as_deref(), Some("3600"));
}

#[tokio::test]
async fn token_endpoint_stores_authorization_error() {
    let (base, state) = spawn_server().await;

    let page = reqwest::get(format!("{base}/token?error=access_denied"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("Login failed"));
    let grant = state.lock().await.clone().expect("grant stored");
    assert!(grant.access_token.is_none());
    assert_eq!(grant.error.as_deref(), Some("access_denied"));
}

#[tokio::test]
async fn token_endpoint_ignores_empty_request() {
    let (base, state) = spawn_server().await;

    let page = reqwest::get(format!("{base}/token"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(page.contains("Missing access token"));
    assert!(state.lock().await.is_none());
}
