use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::TokenStore,
    spotify::client::{ClientError, SpotifyClient},
};

/// Displays the authenticated user's profile.
///
/// Loads the stored token, fetches `GET /me` behind a spinner, and prints
/// the display name, account id, and avatar URL (when one exists). An
/// unauthorized token ends the session with a pointer to `tunecli auth`.
pub async fn profile() {
    let token_store = match TokenStore::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tunecli auth\n Error: {}",
                e
            );
        }
    };

    let client = SpotifyClient::new(token_store.access_token());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match client.get_user_profile().await {
        Ok(user) => {
            pb.finish_and_clear();
            let name = user.display_name.as_deref().unwrap_or(&user.id);
            info!("Logged in as {}", name);
            info!("User ID: {}", user.id);
            if let Some(image) = user.images.first() {
                info!("Avatar: {}", image.url);
            }
        }
        Err(ClientError::Unauthorized) => {
            pb.finish_and_clear();
            error!("Session expired. Please run tunecli auth again.");
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch profile: {}", e);
        }
    }
}
