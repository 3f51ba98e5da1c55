// src/services/gemini.rs
//! Client for the Gemini `generateContent` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RelayConfig;
use crate::error::RelayError;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// System instruction first, then the user's text.
    pub fn new(system: &str, user: &str) -> Self {
        Self {
            contents: vec![Content::text("system", system), Content::text("user", user)],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response.
pub fn extract_reply(resp: GenerateContentResponse) -> Result<String, RelayError> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or(RelayError::Malformed("candidates[0]"))?;
    let content = candidate
        .content
        .ok_or(RelayError::Malformed("candidates[0].content"))?;
    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or(RelayError::Malformed("candidates[0].content.parts[0]"))?;
    part.text
        .ok_or(RelayError::Malformed("candidates[0].content.parts[0].text"))
}

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RelayError::Client)?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    /// One round trip to the model. No retries.
    pub async fn generate(&self, system: &str, user: &str) -> Result<String, RelayError> {
        let payload = GenerateContentRequest::new(system, user);
        debug!(endpoint = %self.endpoint, user_len = user.len(), "calling upstream");

        let resp = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&body)?;
        extract_reply(parsed)
    }
}
