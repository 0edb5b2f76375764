use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{gemini::GeminiClient, warning};

/// Prints search-grounded trivia about a song.
///
/// Failures only cost the output section; there is nothing to tear down.
pub async fn trivia(song: String) {
    let gemini = GeminiClient::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Digging up trivia about '{}'...", song));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match gemini.search_music_trivia(&song).await {
        Ok(text) if !text.is_empty() => {
            pb.finish_and_clear();
            println!("{}", text);
        }
        Ok(_) => {
            pb.finish_and_clear();
            warning!("No trivia came back for '{}'.", song);
        }
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to fetch trivia: {}", e);
        }
    }
}
