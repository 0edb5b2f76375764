use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    gemini::GeminiClient,
    info,
    management::TokenStore,
    spotify::client::{ClientError, SpotifyClient},
    types::{Suggestion, SuggestionTableRow},
    utils, warning,
};

/// Searches tracks for a free-text query and renders the matches.
///
/// With `ai` enabled the same query doubles as a mood prompt for the
/// recommendation service; its suggestions render as a second table. The
/// AI panel is best-effort and disappears on any failure.
pub async fn search(query: String, ai: bool) {
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
    pb.set_message(format!("Searching tracks for '{}'...", query));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match client.search_tracks(&query).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            if tracks.is_empty() {
                info!("No matching tracks.");
            } else {
                let table = Table::new(utils::track_rows(&tracks));
                println!("{}", table);
            }
        }
        Err(ClientError::Unauthorized) => {
            pb.finish_and_clear();
            error!("Session expired. Please run tunecli auth again.");
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to search tracks: {}", e);
        }
    }

    if ai {
        render_suggestions(&query).await;
    }
}

async fn render_suggestions(query: &str) {
    let gemini = GeminiClient::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Asking for suggestions...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match gemini.get_music_recommendations(query).await {
        Ok(suggestions) => {
            pb.finish_and_clear();
            if suggestions.is_empty() {
                return;
            }
            info!("AI suggestions:");
            println!("{}", suggestion_table(&suggestions));
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch suggestions: {}", e);
        }
    }
}

pub(crate) fn suggestion_table(suggestions: &[Suggestion]) -> Table {
    let rows: Vec<SuggestionTableRow> = suggestions
        .iter()
        .map(|s| SuggestionTableRow {
            title: s.title.clone(),
            artist: s.artist.clone(),
            reason: s.reason.clone(),
        })
        .collect();
    Table::new(rows)
}
