//! # API Module
//!
//! This module provides HTTP API endpoints for the tunecli application's local
//! web server. It implements the endpoints needed to complete the browser
//! half of the authentication flow, plus a health check.
//!
//! ## Overview
//!
//! The API module serves as the web interface layer for tunecli. It provides
//! HTTP endpoints that handle:
//!
//! - **OAuth Callback**: The implicit-grant redirect lands here. The access
//!   token travels in the URL fragment, which user agents never transmit to
//!   servers, so the callback page relays the fragment back over a second
//!   request before the server can parse it.
//! - **Health Monitoring**: Provides a health check endpoint for verifying
//!   the callback server is up before the browser is opened.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Serves the relay page that forwards `location.hash` to
//!   the token endpoint and clears it so a reload does not re-submit.
//! - [`capture`] - Receives the relayed fragment, checks the `state` nonce,
//!   extracts the access token, and hands it to the waiting CLI.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that is wired up in
//! [`crate::server`]; the in-progress auth attempt is shared with the CLI
//! through an `Extension`-injected `Arc<Mutex<_>>`.
//!
//! ## Security Considerations
//!
//! - The `state` nonce generated at login time must round-trip through the
//!   authorization server; fragments carrying any other value are rejected
//! - The server binds to a loopback address and only runs for the duration
//!   of a login attempt

mod callback;
mod health;

pub use callback::callback;
pub use callback::capture;
pub use health::health;
