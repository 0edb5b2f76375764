use std::fmt;

use reqwest::{Client, StatusCode};

use crate::{
    config,
    management::TokenStore,
    types::{SearchResponse, TopTracksResponse, Track, UserProfile},
    warning,
};

#[derive(Debug)]
pub enum ClientError {
    /// The token was rejected; the stored copy has already been cleared and
    /// the whole session must be considered over.
    Unauthorized,
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Unauthorized => write!(f, "session token is no longer authorized"),
            ClientError::Http(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ClientError {}

/// Authenticated client for the Spotify Web API surface the player uses.
///
/// Constructed with a bearer token; every method issues an authenticated GET
/// and parses the JSON body. A `401 Unauthorized` from any call clears the
/// persisted token before the error reaches the caller, so the very first
/// rejected request invalidates the whole session. Other requests already in
/// flight are not cancelled and may still resolve on their own.
pub struct SpotifyClient {
    token: String,
}

impl SpotifyClient {
    pub fn new(token: impl Into<String>) -> Self {
        SpotifyClient {
            token: token.into(),
        }
    }

    async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, ClientError> {
        let api_url = format!(
            "{uri}{endpoint}",
            uri = &config::spotify_api_url(),
            endpoint = endpoint
        );

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Err(e) = TokenStore::clear().await {
                warning!("Failed to remove stored token: {}", e);
            }
            return Err(ClientError::Unauthorized);
        }

        Ok(response.error_for_status()?)
    }

    /// Fetches the authenticated user's profile.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(UserProfile)` - Display name, avatar images, and account id
    /// - `Err(ClientError)` - Unauthorized token, HTTP error, or decode error
    pub async fn get_user_profile(&self) -> Result<UserProfile, ClientError> {
        let response = self.get("/me", &[]).await?;
        Ok(response.json::<UserProfile>().await?)
    }

    /// Fetches up to 20 of the user's most played tracks.
    ///
    /// A response without an `items` list, or one that fails to decode,
    /// yields an empty vector rather than an error; the caller never sees
    /// a missing list.
    pub async fn get_top_tracks(&self) -> Result<Vec<Track>, ClientError> {
        let response = self.get("/me/top/tracks", &[("limit", "20")]).await?;
        let parsed = response
            .json::<TopTracksResponse>()
            .await
            .unwrap_or_default();
        Ok(parsed.items)
    }

    /// Searches tracks for a free-text query, returning up to 10 matches.
    ///
    /// Empty queries are legal and empty or malformed provider responses
    /// degrade to an empty vector.
    pub async fn search_tracks(&self, query: &str) -> Result<Vec<Track>, ClientError> {
        let response = self
            .get("/search", &[("q", query), ("type", "track"), ("limit", "10")])
            .await?;
        let parsed = response.json::<SearchResponse>().await.unwrap_or_default();
        Ok(parsed.tracks.unwrap_or_default().items)
    }
}
