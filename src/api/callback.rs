use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::ImplicitGrant, warning};

const CALLBACK_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>spotify-rg</title></head>
<body>
<h4 id="status">Completing login...</h4>
<script>
  var fragment = window.location.hash.substring(1);
  var query = window.location.search.substring(1);
  fetch("/token?" + (fragment || query))
    .then(function (r) { return r.text(); })
    .then(function (html) { document.body.innerHTML = html; })
    .catch(function () {
      document.getElementById("status").textContent = "Could not reach spotify-rg.";
    });
</script>
</body>
</html>
"#;

/// Serves the page the authorization server redirects to.
pub async fn callback() -> Html<&'static str> {
    Html(CALLBACK_PAGE)
}

/// Receives the forwarded redirect parameters and stores them for the waiting
/// login command.
pub async fn token(
    Query(grant): Query<ImplicitGrant>,
    Extension(shared_state): Extension<Arc<Mutex<Option<ImplicitGrant>>>>,
) -> Html<&'static str> {
    let response = match (&grant.access_token, &grant.error) {
        (Some(_), _) => Html("<h2>Login successful.</h2><p>Close browser window.</p>"),
        (None, Some(error)) => {
            warning!("Authorization failed: {}", error);
            Html("<h4>Login failed.</h4>")
        }
        (None, None) => return Html("<h4>Missing access token.</h4>"),
    };

    let mut state = shared_state.lock().await;
    *state = Some(grant);
    response
}
