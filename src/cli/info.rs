use chrono::DateTime;

use crate::{info, management::TokenStore};

/// Shows whether a session token is stored and when it was obtained.
///
/// The token itself is never printed. There is no expiry arithmetic to
/// report; a stored token is only ever proven dead by an unauthorized
/// response from the API.
pub async fn info() {
    match TokenStore::load().await {
        Ok(store) => {
            info!("Session token present.");
            if let Some(obtained) = DateTime::from_timestamp(store.obtained_at() as i64, 0) {
                info!("Obtained at: {}", obtained.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        Err(_) => {
            info!("No session token. Run tunecli auth to log in.");
        }
    }
}
