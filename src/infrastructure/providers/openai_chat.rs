use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ChatProvider, ProviderError};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completion gateway. Builds an ordered message list (optional
/// system-role persona, then one user-role message) and reads the reply
/// from the first completion choice.
pub struct OpenAiChatProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatProvider {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_base_url(OPENAI_API_URL, api_key, model)
    }

    pub fn with_base_url(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    #[tracing::instrument(skip(self, persona, message), fields(model = %self.model))]
    async fn complete(
        &self,
        persona: Option<&str>,
        message: &str,
    ) -> Result<String, ProviderError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(persona) = persona {
            messages.push(serde_json::json!({ "role": "system", "content": persona }));
        }
        messages.push(serde_json::json!({ "role": "user", "content": message }));

        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
        });

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("completion has no choices".to_string())
            })
    }
}
