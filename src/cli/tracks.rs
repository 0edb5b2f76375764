use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::TokenStore,
    spotify::client::{ClientError, SpotifyClient},
    utils,
};

/// Lists the user's top tracks as a numbered table.
pub async fn tracks() {
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
    pb.set_message("Fetching top tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match client.get_top_tracks().await {
        Ok(tracks) => {
            pb.finish_and_clear();
            if tracks.is_empty() {
                info!("No top tracks yet. Listen to some music first.");
                return;
            }

            let table = Table::new(utils::track_rows(&tracks));
            println!("{}", table);
        }
        Err(ClientError::Unauthorized) => {
            pb.finish_and_clear();
            error!("Session expired. Please run tunecli auth again.");
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch top tracks: {}", e);
        }
    }
}
