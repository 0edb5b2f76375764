use reqwest::Client;
use serde_json::json;

use crate::{
    config,
    types::{
        Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
        Suggestion, Tool,
    },
    warning,
};

/// Client for the generative-language recommendation service.
///
/// Holds the API key and model name resolved from configuration. Unlike the
/// Spotify client there is no session to invalidate; a failed call only
/// costs the caller its output section.
pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        GeminiClient {
            api_key: config::gemini_api_key(),
            model: config::gemini_model(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{uri}/models/{model}:generateContent",
            uri = &config::gemini_api_url(),
            model = self.model
        )
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, reqwest::Error> {
        let client = Client::new();
        let response = client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let parsed = response.json::<GenerateContentResponse>().await?;
        Ok(response_text(&parsed))
    }

    /// Requests a structured list of song suggestions for a mood or request.
    ///
    /// The request carries a response schema describing an array of
    /// `{title, artist, reason}` objects, so the model answers in machine-
    /// readable JSON. A reply that cannot be parsed yields an empty list.
    pub async fn get_music_recommendations(
        &self,
        prompt: &str,
    ) -> Result<Vec<Suggestion>, reqwest::Error> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!(
                        "Suggest 5 songs for this mood/request: \"{}\". Provide the song title, artist, and a short reason why it fits.",
                        prompt
                    ),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: suggestion_schema(),
            }),
            tools: None,
        };

        let text = self.generate(&request).await?;
        Ok(parse_suggestions(&text))
    }

    /// Asks for contextual trivia about a song, grounded with web search.
    pub async fn search_music_trivia(&self, song_name: &str) -> Result<String, reqwest::Error> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!(
                        "Tell me something interesting about the song \"{}\" and its artist. Use Google Search for accuracy.",
                        song_name
                    ),
                }],
            }],
            generation_config: None,
            tools: Some(vec![Tool {
                google_search: json!({}),
            }]),
        };

        self.generate(&request).await
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn suggestion_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "artist": { "type": "STRING" },
                "reason": { "type": "STRING" }
            },
            "required": ["title", "artist", "reason"]
        }
    })
}

fn response_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Parses the model's reply into suggestions, degrading to an empty list.
///
/// The model is asked for a bare JSON array; anything else (truncated
/// output, prose, wrong shape) is logged and dropped so the caller can
/// skip the AI panel instead of failing the search.
pub fn parse_suggestions(text: &str) -> Vec<Suggestion> {
    match serde_json::from_str::<Vec<Suggestion>>(text) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            warning!("Failed to parse suggestion response: {}", e);
            Vec::new()
        }
    }
}
