use std::{sync::Arc, time::Duration};

use reqwest::Url;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenStore,
    server::start_api_server,
    success,
    types::AuthAttempt,
    utils, warning,
};

/// Runs the complete implicit-grant authentication flow against Spotify.
///
/// This function orchestrates the entire login process including:
/// 1. Generating the `state` nonce that guards the redirect
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback to deliver the access token
/// 5. Persisting the obtained token for future use
///
/// The implicit grant hands the access token straight back on the redirect
/// (in the URL fragment), so no code exchange happens and no client secret
/// is involved.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the nonce out to the
///   callback handler and the captured token back
///
/// # Authentication Flow
///
/// 1. **Nonce Setup**: A random 64-character `state` value is generated and
///    parked in the shared state
/// 2. **Server Start**: Launches a local HTTP server to handle the redirect
/// 3. **Browser Launch**: Opens the Spotify authorization URL with the fixed
///    scope set in the default browser
/// 4. **User Authorization**: User grants permissions in their browser
/// 5. **Fragment Capture**: The callback page relays the URL fragment; the
///    server parses the token and verifies the nonce
/// 6. **Token Persistence**: Token is saved for future API requests
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tokio::sync::Mutex;
///
/// let shared_state = Arc::new(Mutex::new(None));
/// login(shared_state).await;
/// ```
pub async fn login(shared_state: Arc<Mutex<Option<AuthAttempt>>>) {
    let state_nonce = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL; Url handles the scope/redirect encoding
    let auth_url = match Url::parse_with_params(
        &config::spotify_auth_url(),
        &[
            ("client_id", config::spotify_client_id()),
            ("response_type", "token".to_string()),
            ("redirect_uri", config::spotify_redirect_uri()),
            ("scope", config::SPOTIFY_SCOPE.to_string()),
            ("state", state_nonce.clone()),
        ],
    ) {
        Ok(url) => url,
        Err(e) => error!("Failed to build authorization URL: {}", e),
    };

    // Park the nonce in shared state before the redirect can come back
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthAttempt {
            state: state_nonce,
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_store = TokenStore::new(t);
            if let Err(e) = token_store.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a captured access token with a 60-second
/// timeout. This function runs concurrently with the callback handler that
/// populates the token after the fragment relay.
///
/// # Arguments
///
/// * `shared_state` - Shared state containing the in-progress auth attempt
///
/// # Returns
///
/// Returns `Some(token)` if authentication completes successfully within the
/// timeout period, or `None` if the timeout is reached without a token.
///
/// # Timeout Behavior
///
/// - Maximum wait time: 60 seconds
/// - Polling interval: 1 second
/// - Non-blocking: Uses async sleep to avoid CPU spinning
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthAttempt>>>) -> Option<String> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(attempt) = lock.as_ref() {
            if let Some(token) = &attempt.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
