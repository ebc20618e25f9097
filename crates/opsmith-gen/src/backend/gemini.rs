use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextBackend;

const DEFAULT_MODEL: &str = "gemini-pro";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini REST backend — calls the `generateContent` endpoint of the
/// Generative Language API with an API key (`GEMINI_API_KEY`).
pub struct GeminiBackend {
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl TextBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(&self.model)
    }

    async fn preflight_check(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is not configured");
        }
        Ok(())
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{API_BASE}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Gemini API request failed")?;

        match resp.status() {
            StatusCode::TOO_MANY_REQUESTS => {
                bail!("API quota exceeded. Please try again later.")
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                bail!("Invalid API key configuration")
            }
            status if !status.is_success() => bail!("Gemini API error: {status}"),
            _ => {}
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .context("Gemini API returned an unreadable body")?;
        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            bail!("Empty response from Gemini API");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preflight_rejects_blank_api_key() {
        let err = GeminiBackend::new("").preflight_check().await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let err = GeminiBackend::new("   ").preflight_check().await.unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn preflight_accepts_configured_key() {
        GeminiBackend::new("test-key").preflight_check().await.unwrap();
        assert_eq!(GeminiBackend::new("test-key").model_hint(), Some("gemini-pro"));
    }
}
