use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode, response::Html};
use tokio::sync::Mutex;

use crate::{types::AuthAttempt, utils, warning};

// The token arrives in the URL fragment, which the browser keeps to itself.
// This page hands the fragment to /token and wipes it from the address bar
// so a reload of the callback URL cannot re-submit a token.
const CALLBACK_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <h2>Completing login&hellip;</h2>
    <script>
      const fragment = window.location.hash;
      history.replaceState(null, '', window.location.pathname);
      fetch('/token?fragment=' + encodeURIComponent(fragment))
        .then((res) => {
          document.body.innerHTML = res.ok
            ? '<h2>Authentication successful.</h2><p>Close browser window.</p>'
            : '<h4>Login failed.</h4>';
        })
        .catch(() => {
          document.body.innerHTML = '<h4>Login failed.</h4>';
        });
    </script>
  </body>
</html>"#;

pub async fn callback() -> Html<&'static str> {
    Html(CALLBACK_PAGE)
}

pub async fn capture(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthAttempt>>>>,
) -> (StatusCode, &'static str) {
    let Some(fragment) = params.get("fragment") else {
        return (StatusCode::BAD_REQUEST, "Missing fragment.");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut attempt) = state.as_mut() else {
        return (StatusCode::CONFLICT, "No login in progress.");
    };

    // The nonce sent out on the authorize URL has to come back unchanged
    if utils::fragment_param(fragment, "state").as_deref() != Some(attempt.state.as_str()) {
        warning!("Rejected callback with unexpected state value.");
        return (StatusCode::UNAUTHORIZED, "State mismatch.");
    }

    match utils::token_from_fragment(fragment) {
        Some(token) => {
            attempt.token = Some(token);
            (StatusCode::OK, "ok")
        }
        None => (StatusCode::BAD_REQUEST, "Missing access token."),
    }
}
