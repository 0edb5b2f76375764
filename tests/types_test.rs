use tunecli::gemini::parse_suggestions;
use tunecli::types::{SearchResponse, TopTracksResponse, UserProfile};

#[test]
fn test_top_tracks_missing_items_defaults_empty() {
    // An absent items list must come back as an empty vec, never null
    let parsed: TopTracksResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.items.is_empty());
}

#[test]
fn test_top_tracks_parses_items() {
    let json = r#"{
        "items": [
            {
                "id": "t1",
                "name": "Song One",
                "artists": [{ "name": "Artist A" }],
                "album": { "name": "Album One", "images": [{ "url": "http://img" }] },
                "duration_ms": 201000,
                "uri": "spotify:track:t1"
            }
        ]
    }"#;

    let parsed: TopTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].name, "Song One");
    assert_eq!(parsed.items[0].artists[0].name, "Artist A");
    assert_eq!(parsed.items[0].duration_ms, 201000);
}

#[test]
fn test_track_tolerates_sparse_fields() {
    // Only id and name are load-bearing; everything else defaults
    let json = r#"{ "items": [{ "id": "t1", "name": "Bare" }] }"#;

    let parsed: TopTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.items[0].name, "Bare");
    assert!(parsed.items[0].artists.is_empty());
    assert_eq!(parsed.items[0].duration_ms, 0);
    assert_eq!(parsed.items[0].uri, "");
}

#[test]
fn test_search_missing_tracks_container() {
    let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.tracks.unwrap_or_default().items.is_empty());
}

#[test]
fn test_search_null_tracks_container() {
    let parsed: SearchResponse = serde_json::from_str(r#"{ "tracks": null }"#).unwrap();
    assert!(parsed.tracks.unwrap_or_default().items.is_empty());
}

#[test]
fn test_search_parses_tracks() {
    let json = r#"{
        "tracks": {
            "items": [
                { "id": "t1", "name": "Hit One" },
                { "id": "t2", "name": "Hit Two" }
            ]
        }
    }"#;

    let parsed: SearchResponse = serde_json::from_str(json).unwrap();
    let items = parsed.tracks.unwrap_or_default().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].name, "Hit Two");
}

#[test]
fn test_user_profile_null_display_name() {
    let json = r#"{ "id": "user1", "display_name": null }"#;

    let parsed: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.id, "user1");
    assert!(parsed.display_name.is_none());
    assert!(parsed.images.is_empty());
}

#[test]
fn test_user_profile_with_avatar() {
    let json = r#"{
        "id": "user1",
        "display_name": "Ada",
        "images": [{ "url": "http://avatar" }]
    }"#;

    let parsed: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.display_name.as_deref(), Some("Ada"));
    assert_eq!(parsed.images[0].url, "http://avatar");
}

#[test]
fn test_parse_suggestions_valid_array() {
    let text = r#"[
        { "title": "Song A", "artist": "Artist A", "reason": "It fits." },
        { "title": "Song B", "artist": "Artist B", "reason": "Also fits." }
    ]"#;

    let suggestions = parse_suggestions(text);
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].title, "Song A");
    assert_eq!(suggestions[1].reason, "Also fits.");
}

#[test]
fn test_parse_suggestions_empty_array() {
    assert!(parse_suggestions("[]").is_empty());
}

#[test]
fn test_parse_suggestions_malformed() {
    // Prose, truncated output and wrong shapes all degrade to empty
    assert!(parse_suggestions("Sorry, I cannot help with that.").is_empty());
    assert!(parse_suggestions(r#"[{ "title": "Song A", "#).is_empty());
    assert!(parse_suggestions(r#"{ "title": "not an array" }"#).is_empty());
    assert!(parse_suggestions("").is_empty());
}

#[test]
fn test_parse_suggestions_missing_field() {
    // A reason-less object does not match the schema the model was given
    assert!(parse_suggestions(r#"[{ "title": "Song A", "artist": "A" }]"#).is_empty());
}
