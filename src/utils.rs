use rand::{Rng, distr::Alphanumeric};

use crate::types::{Track, TrackArtist, TrackTableRow};

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Extracts a single parameter value from a URL fragment.
///
/// Accepts the fragment with or without its leading `#`. Parameter order
/// does not matter; the first pair whose key matches wins. Returns `None`
/// when the key is absent or has no value.
pub fn fragment_param(fragment: &str, key: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    for pair in fragment.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key && !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }

    None
}

/// Pulls the bearer token out of a post-redirect URL fragment.
///
/// The authorization server appends `#access_token=...&token_type=...` to
/// the redirect target. A fragment without the marker yields `None` and is
/// left for the caller to ignore.
pub fn token_from_fragment(fragment: &str) -> Option<String> {
    fragment_param(fragment, "access_token")
}

pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn format_artists(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn track_rows(tracks: &[Track]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            title: t.name.clone(),
            artists: format_artists(&t.artists),
            album: t.album.name.clone(),
            length: format_duration(t.duration_ms),
        })
        .collect()
}
