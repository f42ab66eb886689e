use async_trait::async_trait;
use lexique_generator::{GenerateError, Generator, ProviderMetadata};
use serde_json::json;

use crate::prompt::entry_prompt;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Entry generator backed by the Anthropic Messages API
#[derive(Clone)]
pub struct FrenchGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl FrenchGenerator {
    pub fn new(api_key: String, api_url: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
            max_tokens,
        }
    }

    fn request_body(&self, headword: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0,
            "messages": [
                {
                    "role": "user",
                    "content": [{ "type": "text", "text": entry_prompt(headword) }]
                }
            ]
        })
    }
}

#[async_trait]
impl Generator for FrenchGenerator {
    async fn generate(&self, headword: &str) -> Result<String, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::Authentication);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request_body(headword))
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerateError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerateError::Authentication);
        }

        if !response.status().is_success() {
            return Err(GenerateError::Api(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerateError::Api(format!("Failed to parse response: {}", e)))?;

        response_text(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Anthropic".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

/// Concatenated text blocks of a Messages API reply
fn response_text(json: &serde_json::Value) -> Result<String, GenerateError> {
    let text: String = json["content"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();

    if text.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    Ok(text)
}
