//! # Gemini Integration Module
//!
//! This module provides the client for the generative-language API that
//! augments search results with recommendations and now-playing trivia.
//!
//! ## Overview
//!
//! Two operations are exposed, both issued against the `generateContent`
//! endpoint:
//!
//! - **Recommendations** - A natural-language mood or request is sent with a
//!   structured-output schema; the model replies with a JSON array of
//!   `{title, artist, reason}` suggestions. A reply that fails to parse
//!   degrades to an empty list rather than an error.
//! - **Trivia** - A prompt about the current song is sent with the
//!   `googleSearch` grounding tool enabled so the model can back its answer
//!   with live search; the reply is free text.
//!
//! Both calls are fire-and-forget from the player's perspective: failures
//! are logged as warnings and the corresponding output section is simply
//! omitted.
//!
//! ## Request Shape
//!
//! Requests and responses use the same reqwest/serde plumbing as the
//! Spotify client; the wire types live in [`crate::types`]. The API key is
//! passed as a query parameter, the model name comes from configuration.

pub mod client;

pub use client::GeminiClient;
pub use client::parse_suggestions;
