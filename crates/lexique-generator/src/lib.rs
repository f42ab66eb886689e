use serde::{Deserialize, Serialize};

/// Entry text generation interface
///
/// Turns a headword into raw, loosely structured entry text. Retrying a
/// failed call and bounding its duration are up to the caller.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Produce raw entry text for a word or short expression
    async fn generate(&self, headword: &str) -> Result<String, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    Authentication,

    #[error("Provider returned no text")]
    EmptyResponse,
}
