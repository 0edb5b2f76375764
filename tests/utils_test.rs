use tunecli::types::{Album, Track, TrackArtist};
use tunecli::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artist: &str, duration_ms: u64) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![TrackArtist {
            name: artist.to_string(),
        }],
        album: Album {
            name: format!("{} (Album)", name),
            images: Vec::new(),
        },
        duration_ms,
        uri: format!("spotify:track:{}", id),
    }
}

#[test]
fn test_token_from_fragment_with_marker() {
    let fragment = "#access_token=BQabc123&token_type=Bearer&expires_in=3600";
    assert_eq!(token_from_fragment(fragment), Some("BQabc123".to_string()));
}

#[test]
fn test_token_from_fragment_position_independent() {
    // The marker does not have to be the first pair
    let fragment = "#token_type=Bearer&state=xyz&access_token=BQlater";
    assert_eq!(token_from_fragment(fragment), Some("BQlater".to_string()));
}

#[test]
fn test_token_from_fragment_without_marker() {
    assert_eq!(token_from_fragment("#error=access_denied"), None);
    assert_eq!(token_from_fragment("#"), None);
    assert_eq!(token_from_fragment(""), None);
}

#[test]
fn test_token_from_fragment_without_hash_prefix() {
    // The relay hands over whatever location.hash contained; a missing '#'
    // must not change the result
    let fragment = "access_token=BQnohash&token_type=Bearer";
    assert_eq!(token_from_fragment(fragment), Some("BQnohash".to_string()));
}

#[test]
fn test_token_from_fragment_empty_value() {
    assert_eq!(token_from_fragment("#access_token=&token_type=Bearer"), None);
}

#[test]
fn test_fragment_param() {
    let fragment = "#access_token=BQabc&state=nonce42&expires_in=3600";

    assert_eq!(
        fragment_param(fragment, "state"),
        Some("nonce42".to_string())
    );
    assert_eq!(
        fragment_param(fragment, "expires_in"),
        Some("3600".to_string())
    );
    assert_eq!(fragment_param(fragment, "missing"), None);
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 64 characters
    assert_eq!(state.len(), 64);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(201_000), "3:21");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_format_artists() {
    let artists = vec![
        TrackArtist {
            name: "First".to_string(),
        },
        TrackArtist {
            name: "Second".to_string(),
        },
    ];

    assert_eq!(format_artists(&artists), "First, Second");
    assert_eq!(format_artists(&artists[..1]), "First");
    assert_eq!(format_artists(&[]), "");
}

#[test]
fn test_track_rows() {
    let tracks = vec![
        create_test_track("t1", "Song One", "Artist A", 201_000),
        create_test_track("t2", "Song Two", "Artist B", 59_999),
    ];

    let rows = track_rows(&tracks);

    // Positions are 1-based
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[1].position, 2);

    assert_eq!(rows[0].title, "Song One");
    assert_eq!(rows[0].artists, "Artist A");
    assert_eq!(rows[0].album, "Song One (Album)");
    assert_eq!(rows[0].length, "3:21");
    assert_eq!(rows[1].length, "0:59");
}

#[test]
fn test_track_rows_empty() {
    assert!(track_rows(&[]).is_empty());
}
