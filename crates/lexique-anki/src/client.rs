use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::card::Card;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({})).await?;
        response.into_result()
    }

    /// Create `deck` if it does not exist yet
    pub async fn create_deck(&self, deck: &str) -> Result<u64> {
        let response: AnkiResponse<u64> =
            self.invoke("createDeck", json!({ "deck": deck })).await?;
        response.into_result()
    }

    /// Add a card as a note of `model` in `deck`
    pub async fn add_note(&self, deck: &str, model: &str, card: &Card) -> Result<u64> {
        let response: AnkiResponse<u64> =
            self.invoke("addNote", note_params(deck, model, card)).await?;
        response.into_result()
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")
    }
}

pub(crate) fn note_params(deck: &str, model: &str, card: &Card) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    for (name, value) in Card::FIELDS.iter().zip(card.values()) {
        fields.insert(name.to_string(), json!(value));
    }

    json!({
        "note": {
            "deckName": deck,
            "modelName": model,
            "fields": fields,
            "options": { "allowDuplicate": false },
            "tags": ["lexique"]
        }
    })
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}
