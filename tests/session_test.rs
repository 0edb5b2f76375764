use tunecli::management::{AppState, Session};
use tunecli::types::{Track, UserProfile};

// Helper function to create a test track
fn create_test_track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        ..Track::default()
    }
}

// Helper function to create a test profile
fn create_test_user(id: &str, display_name: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        display_name: Some(display_name.to_string()),
        images: Vec::new(),
    }
}

#[test]
fn test_boot_state_is_logged_out() {
    let state = AppState::new();

    assert_eq!(state.session(), Session::LoggedOut);
    assert!(state.user().is_none());
    assert!(state.current_track().is_none());
    assert!(!state.is_playing());
    assert!(state.top_tracks().is_empty());
    assert!(state.search_results().is_empty());
}

#[test]
fn test_session_transitions() {
    let mut state = AppState::new();

    state.authenticating();
    assert_eq!(state.session(), Session::Authenticating);

    state.ready();
    assert_eq!(state.session(), Session::Ready);
}

#[test]
fn test_play_track_sets_track_and_flag_together() {
    let mut state = AppState::new();

    state.play_track(create_test_track("t1", "Song One"));

    assert!(state.is_playing());
    assert_eq!(state.current_track().unwrap().id, "t1");
}

#[test]
fn test_toggle_without_track_never_starts_playback() {
    let mut state = AppState::new();

    assert!(!state.toggle_playback());
    assert!(!state.is_playing());
    assert!(state.current_track().is_none());

    // Repeated toggles don't sneak the flag on either
    assert!(!state.toggle_playback());
    assert!(!state.is_playing());
}

#[test]
fn test_toggle_roundtrip_keeps_track_loaded() {
    let mut state = AppState::new();
    state.play_track(create_test_track("t1", "Song One"));

    // Pause: flag off, track stays
    assert!(!state.toggle_playback());
    assert!(!state.is_playing());
    assert!(state.current_track().is_some());

    // Resume: flag back on
    assert!(state.toggle_playback());
    assert!(state.is_playing());
}

#[test]
fn test_stop_clears_track_and_flag() {
    let mut state = AppState::new();
    state.play_track(create_test_track("t1", "Song One"));

    state.stop();

    assert!(state.current_track().is_none());
    assert!(!state.is_playing());
}

#[test]
fn test_playing_implies_track_across_transitions() {
    let mut state = AppState::new();

    // Walk a representative command sequence and check the invariant
    // after every single step
    let check = |s: &AppState| {
        if s.is_playing() {
            assert!(s.current_track().is_some());
        }
    };

    state.toggle_playback();
    check(&state);
    state.play_track(create_test_track("t1", "One"));
    check(&state);
    state.toggle_playback();
    check(&state);
    state.toggle_playback();
    check(&state);
    state.play_track(create_test_track("t2", "Two"));
    check(&state);
    state.stop();
    check(&state);
    state.toggle_playback();
    check(&state);
    state.reset();
    check(&state);
}

#[test]
fn test_slice_merges_are_order_independent() {
    // Profile and top-tracks fetches resolve in either order; the final
    // state must not depend on which lands first
    let user = create_test_user("u1", "Ada");
    let tracks = vec![
        create_test_track("t1", "Song One"),
        create_test_track("t2", "Song Two"),
    ];

    let mut user_first = AppState::new();
    user_first.ready();
    user_first.set_user(user.clone());
    user_first.set_top_tracks(tracks.clone());

    let mut tracks_first = AppState::new();
    tracks_first.ready();
    tracks_first.set_top_tracks(tracks.clone());
    tracks_first.set_user(user.clone());

    for state in [&user_first, &tracks_first] {
        assert_eq!(state.user().unwrap().display_name.as_deref(), Some("Ada"));
        assert_eq!(state.top_tracks().len(), 2);
    }
}

#[test]
fn test_partial_state_is_tolerated() {
    // Only one slice has arrived; the session is still usable
    let mut state = AppState::new();
    state.ready();
    state.set_top_tracks(vec![create_test_track("t1", "Song One")]);

    assert!(state.user().is_none());
    assert_eq!(state.top_tracks().len(), 1);
    assert_eq!(state.session(), Session::Ready);
}

#[test]
fn test_reset_restores_logged_out_shape() {
    let mut state = AppState::new();
    state.ready();
    state.set_user(create_test_user("u1", "Ada"));
    state.set_top_tracks(vec![create_test_track("t1", "Song One")]);
    state.play_track(create_test_track("t2", "Song Two"));

    state.reset();

    assert_eq!(state.session(), Session::LoggedOut);
    assert!(state.user().is_none());
    assert!(state.current_track().is_none());
    assert!(!state.is_playing());
    assert!(state.top_tracks().is_empty());
}

#[test]
fn test_search_results_slice() {
    let mut state = AppState::new();
    state.set_search_results(vec![create_test_track("t1", "Hit")]);

    assert_eq!(state.search_results().len(), 1);

    // A later search replaces the previous result set
    state.set_search_results(Vec::new());
    assert!(state.search_results().is_empty());
}
