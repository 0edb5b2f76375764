use std::io::Write;
use std::sync::Arc;

use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use crate::{
    error,
    gemini::GeminiClient,
    info,
    management::{AppState, TokenStore},
    spotify::client::{ClientError, SpotifyClient},
    success,
    types::Track,
    utils, warning,
};

use super::search::suggestion_table;

/// Runs the interactive playback session.
///
/// Boots the application state machine from the stored token, kicks off the
/// profile and top-tracks fetches as independent tasks, then reads commands
/// from stdin until `quit` or a dead session ends the loop. Each fetch
/// merges only its own slice of state; the session renders with whatever
/// has arrived so far.
pub async fn player() {
    let token_store = match TokenStore::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run tunecli auth\n Error: {}",
                e
            );
        }
    };

    let state = Arc::new(Mutex::new(AppState::new()));
    state.lock().await.ready();

    let client = Arc::new(SpotifyClient::new(token_store.access_token()));

    // Profile and top tracks load concurrently and unordered; neither waits
    // for the other and a failure only leaves its slice empty.
    let profile_state = Arc::clone(&state);
    let profile_client = Arc::clone(&client);
    tokio::spawn(async move {
        match profile_client.get_user_profile().await {
            Ok(user) => profile_state.lock().await.set_user(user),
            Err(ClientError::Unauthorized) => {
                profile_state.lock().await.reset();
                warning!("Session expired while loading profile. Run tunecli auth again.");
            }
            Err(e) => warning!("Failed to load profile: {}", e),
        }
    });

    let tracks_state = Arc::clone(&state);
    let tracks_client = Arc::clone(&client);
    tokio::spawn(async move {
        match tracks_client.get_top_tracks().await {
            Ok(tracks) => tracks_state.lock().await.set_top_tracks(tracks),
            Err(ClientError::Unauthorized) => {
                tracks_state.lock().await.reset();
                warning!("Session expired while loading top tracks. Run tunecli auth again.");
            }
            Err(e) => warning!("Failed to load top tracks: {}", e),
        }
    });

    info!("Interactive session started. Type 'help' for commands, 'quit' to leave.");

    // the list play-number commands index into; refreshed by top and search
    let mut listing: Vec<Track> = Vec::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break,
        };
        let line = line.trim();

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => break,
            "top" => {
                let tracks = state.lock().await.top_tracks().to_vec();
                if tracks.is_empty() {
                    info!("No top tracks loaded (yet).");
                } else {
                    println!("{}", Table::new(utils::track_rows(&tracks)));
                    listing = tracks;
                }
            }
            "search" => {
                if rest.is_empty() {
                    warning!("Usage: search <query>");
                    continue;
                }
                match client.search_tracks(rest).await {
                    Ok(tracks) => {
                        if tracks.is_empty() {
                            info!("No matching tracks.");
                        } else {
                            println!("{}", Table::new(utils::track_rows(&tracks)));
                        }
                        state.lock().await.set_search_results(tracks.clone());
                        listing = tracks;
                    }
                    Err(ClientError::Unauthorized) => {
                        state.lock().await.reset();
                        error!("Session expired. Please run tunecli auth again.");
                    }
                    Err(e) => warning!("Failed to search tracks: {}", e),
                }
            }
            "ai" => {
                if rest.is_empty() {
                    warning!("Usage: ai <mood or request>");
                    continue;
                }
                match GeminiClient::new().get_music_recommendations(rest).await {
                    Ok(suggestions) if suggestions.is_empty() => {}
                    Ok(suggestions) => {
                        info!("AI suggestions:");
                        println!("{}", suggestion_table(&suggestions));
                    }
                    Err(e) => warning!("Failed to fetch suggestions: {}", e),
                }
            }
            "play" => {
                let position = match rest.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => {
                        warning!("Usage: play <number from the last listing>");
                        continue;
                    }
                };
                match listing.get(position - 1) {
                    Some(track) => {
                        let mut app = state.lock().await;
                        app.play_track(track.clone());
                        success!(
                            "Playing {} by {}",
                            track.name,
                            utils::format_artists(&track.artists)
                        );
                    }
                    None => warning!("No track #{} in the last listing.", position),
                }
            }
            "pause" | "p" => {
                let mut app = state.lock().await;
                if app.current_track().is_none() {
                    warning!("Nothing is loaded. Use play <n> first.");
                } else if app.toggle_playback() {
                    info!("Resumed.");
                } else {
                    info!("Paused.");
                }
            }
            "now" => {
                let app = state.lock().await;
                match app.current_track() {
                    Some(track) => {
                        let flag = if app.is_playing() { "▶" } else { "⏸" };
                        info!(
                            "{} {} by {} ({})",
                            flag,
                            track.name,
                            utils::format_artists(&track.artists),
                            utils::format_duration(track.duration_ms)
                        );
                    }
                    None => info!("Nothing is playing."),
                }
                if let Some(user) = app.user() {
                    let name = user.display_name.as_deref().unwrap_or(&user.id);
                    info!("Session: {}", name);
                }
            }
            "trivia" => {
                let current = state.lock().await.current_track().cloned();
                let Some(track) = current else {
                    warning!("Nothing is playing. Use play <n> first.");
                    continue;
                };
                let subject = format!(
                    "{} by {}",
                    track.name,
                    utils::format_artists(&track.artists)
                );
                match GeminiClient::new().search_music_trivia(&subject).await {
                    Ok(text) if !text.is_empty() => println!("{}", text),
                    Ok(_) => warning!("No trivia came back."),
                    Err(e) => warning!("Failed to fetch trivia: {}", e),
                }
            }
            _ => warning!("Unknown command '{}'. Type 'help' for commands.", command),
        }
    }

    info!("Session closed.");
}

fn print_help() {
    println!("  top              list your top tracks");
    println!("  search <query>   search tracks");
    println!("  ai <mood>        AI suggestions for a mood or request");
    println!("  play <n>         play track n from the last listing");
    println!("  pause            toggle play/pause");
    println!("  now              show what is playing");
    println!("  trivia           trivia about the playing track");
    println!("  quit             leave the session");
}
