//! Configuration management for the AI-assisted Spotify player CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, the Gemini API key, server
//! settings, and other runtime parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// The fixed permission set requested during authorization.
///
/// Matches what the player needs: reading the profile, library and top
/// tracks, and controlling playback. Requesting a constant scope set keeps
/// the consent screen stable across logins.
pub const SPOTIFY_SCOPE: &str = "user-read-private user-read-email user-library-read user-top-read user-read-recently-played user-modify-playback-state streaming";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tunecli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tunecli/.env`
/// - macOS: `~/Library/Application Support/tunecli/.env`
/// - Windows: `%LOCALAPPDATA%/tunecli/.env`
///
/// A missing `.env` file is not an error; variables may also be provided
/// through the process environment directly.
///
/// # Returns
///
/// Returns `Ok(())` if the environment is usable, or an error string if the
/// directory structure cannot be created.
///
/// # Example
///
/// ```
/// use tunecli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunecli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the local HTTP server should bind for
/// handling OAuth callbacks during the authentication flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable which specifies
/// the callback URL that Spotify should redirect to after user authorization.
/// This must match the redirect URI registered in the Spotify application
/// settings and must point at the local callback server.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://127.0.0.1:8080/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_AUTH_URL` environment variable, falling back to
/// the public authorization endpoint. This is where users are redirected to
/// grant permissions to the application.
///
/// # Example
///
/// ```
/// let auth_url = spotify_auth_url(); // "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// public v1 endpoint. This is used for all API operations after
/// authentication.
///
/// # Example
///
/// ```
/// let api_url = spotify_api_url(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Gemini API key for the recommendation service.
///
/// Retrieves the `GEMINI_API_KEY` environment variable which contains the
/// key issued by Google AI Studio for the generative-language API.
///
/// # Panics
///
/// Panics if the `GEMINI_API_KEY` environment variable is not set.
///
/// # Security Note
///
/// The API key should be kept confidential and never exposed in logs
/// or version control.
pub fn gemini_api_key() -> String {
    env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set")
}

/// Returns the generative-language API base URL.
///
/// Retrieves the `GEMINI_API_URL` environment variable, falling back to the
/// public v1beta endpoint.
///
/// # Example
///
/// ```
/// let url = gemini_api_url(); // "https://generativelanguage.googleapis.com/v1beta"
/// ```
pub fn gemini_api_url() -> String {
    env::var("GEMINI_API_URL")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string())
}

/// Returns the model used for recommendations and trivia.
///
/// Retrieves the `GEMINI_MODEL` environment variable, falling back to the
/// flash-tier default.
pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-3-flash-preview".to_string())
}
