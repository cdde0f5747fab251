use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ContentProvider, ProviderError};

const GENERATIVE_LANGUAGE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// Generate-content gateway, authenticated via an API-key query parameter.
/// The given text is embedded as a single block in the nested parts
/// structure and the reply is read from the first candidate's first part.
pub struct GeminiContentProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiContentProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(GENERATIVE_LANGUAGE_URL, api_key, model)
    }

    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl ContentProvider for GeminiContentProvider {
    #[tracing::instrument(skip(self, text), fields(model = %self.model))]
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        let body = serde_json::json!({
            "contents": [
                { "parts": [ { "text": text } ] }
            ]
        });

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let reply: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("response has no candidate text".to_string())
            })
    }
}
