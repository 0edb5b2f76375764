use crate::types::{Track, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    Authenticating,
    Ready,
}

/// The single authoritative copy of the application state.
///
/// Views and fetch tasks hold this behind `Arc<Mutex<_>>` and request
/// transitions through the methods below; nothing outside this struct
/// mutates the fields. Profile and top-tracks slices are merged
/// independently, in whichever order their fetches resolve.
///
/// Invariant: `playing` is only ever true while a track is loaded.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    session: Session,
    user: Option<UserProfile>,
    top_tracks: Vec<Track>,
    search_results: Vec<Track>,
    current_track: Option<Track>,
    playing: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn authenticating(&mut self) {
        self.session = Session::Authenticating;
    }

    pub fn ready(&mut self) {
        self.session = Session::Ready;
    }

    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn set_top_tracks(&mut self, tracks: Vec<Track>) {
        self.top_tracks = tracks;
    }

    pub fn top_tracks(&self) -> &[Track] {
        &self.top_tracks
    }

    pub fn set_search_results(&mut self, tracks: Vec<Track>) {
        self.search_results = tracks;
    }

    pub fn search_results(&self) -> &[Track] {
        &self.search_results
    }

    /// Loads a track and starts playback in the same step.
    pub fn play_track(&mut self, track: Track) {
        self.current_track = Some(track);
        self.playing = true;
    }

    /// Flips play/pause and returns the new flag.
    ///
    /// Pausing is always allowed; playback only starts while a track is
    /// loaded, so the playing flag can never outlive its track.
    pub fn toggle_playback(&mut self) -> bool {
        if self.playing {
            self.playing = false;
        } else if self.current_track.is_some() {
            self.playing = true;
        }
        self.playing
    }

    pub fn stop(&mut self) {
        self.current_track = None;
        self.playing = false;
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Hard reset back to the logged-out shape. Used when a token turns out
    /// to be unauthorized mid-session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
