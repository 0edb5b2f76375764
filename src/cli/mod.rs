//! # CLI Module
//!
//! This module provides the command-line interface layer for tunecli, an
//! AI-assisted player front-end for the Spotify API. It implements all
//! user-facing CLI commands and coordinates between the API clients, the
//! token store, and the playback session state.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality. It provides commands for:
//!
//! - **Authentication**: Implicit-grant login flow for Spotify API access
//! - **Library Browsing**: Profile display and top-track listings
//! - **Discovery**: Track search with optional AI-generated suggestions
//! - **Trivia**: Search-grounded background stories for a song
//! - **Playback Session**: An interactive loop that owns the application
//!   state machine
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify implicit-grant authorization flow
//!
//! ### Library Operations
//!
//! - [`profile`] - Displays the authenticated user's profile
//! - [`tracks`] - Lists the user's top tracks
//!
//! ### Discovery Operations
//!
//! - [`search`] - Searches tracks, optionally augmented with AI suggestions
//! - [`trivia`] - Prints grounded trivia about a song
//!
//! ### Session Operations
//!
//! - [`player`] - Runs the interactive playback session
//! - [`info`] - Shows the stored session status
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token Store, Session State)
//!     ↓
//! API Layer (Spotify / Gemini Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command loads the persisted token (directing the user to
//! `tunecli auth` when absent), performs its fetches behind a progress
//! spinner, and renders tables or formatted lines.
//!
//! ## Error Handling Philosophy
//!
//! - **Session teardown**: Any unauthorized response ends the session on the
//!   spot; the stored token is already gone by the time the message prints
//! - **Graceful degradation**: A failed profile or track fetch leaves its
//!   output section empty instead of aborting the whole command
//! - **Silent AI failures**: Recommendation and trivia problems are logged
//!   as warnings and their sections omitted
//!
//! ## Progress and User Experience
//!
//! Network-bound operations display indicatif spinners, results render as
//! tables via tabled, and the logging macros provide consistent colored
//! status output.

mod auth;
mod info;
mod player;
mod profile;
mod search;
mod tracks;
mod trivia;

pub use auth::auth;
pub use info::info;
pub use player::player;
pub use profile::profile;
pub use search::search;
pub use tracks::tracks;
pub use trivia::trivia;
