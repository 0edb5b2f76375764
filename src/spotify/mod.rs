//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! player: the browser-based authorization flow and the authenticated data
//! client. It is the primary integration layer between tunecli and Spotify's
//! services, handling HTTP communication, token capture, and the session
//! teardown that follows an expired token.
//!
//! ## Overview
//!
//! Two concerns live here:
//!
//! - [`auth`] - Implements the implicit-grant authorization flow. The user's
//!   browser is sent to Spotify's consent page; Spotify redirects back to the
//!   local callback server with an access token in the URL fragment, which is
//!   captured, verified against the `state` nonce, and persisted.
//! - [`client`] - A thin authenticated client over the REST surface the
//!   player consumes: the user profile, the user's top tracks, and free-text
//!   track search.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Session State)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authorization (implicit grant, state nonce)
//!     └── Data Client (profile, top tracks, search)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The implicit grant returns the bearer token directly on the redirect, so
//! there is no code exchange and no refresh token. The flow is:
//!
//! 1. **Nonce Generation**: A random `state` value guards the redirect
//! 2. **Server Start**: A local HTTP server waits for the callback
//! 3. **Browser Launch**: The authorization URL opens in the default browser
//! 4. **User Authorization**: The user grants permissions on Spotify's page
//! 5. **Fragment Capture**: The callback page relays the URL fragment to the
//!    server, which parses the token and checks the nonce
//! 6. **Token Storage**: The token is persisted for future API requests
//!
//! ## Session Invalidation
//!
//! The token carries no expiry bookkeeping. Instead, every client call
//! watches for `401 Unauthorized`: the first one anywhere clears the stored
//! token and surfaces [`client::ClientError::Unauthorized`], which callers
//! treat as a hard reset of the whole session. Requests already in flight
//! are not cancelled; they resolve or fail on their own.
//!
//! ## Error Handling
//!
//! There are deliberately no retries, no backoff, and no rate-limit
//! handling: failures either tear the session down (401) or degrade the
//! affected data slice to its empty state, matching the player's
//! render-with-whatever-arrived model.
//!
//! ## API Coverage
//!
//! - `GET /me` - Authenticated user's profile
//! - `GET /me/top/tracks?limit=20` - The user's most played tracks
//! - `GET /search?q=..&type=track&limit=10` - Free-text track search

pub mod auth;
pub mod client;
