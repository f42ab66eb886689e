use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.anthropic.com/v1/messages".to_string()
}

fn default_model() -> String {
    "claude-3-5-sonnet-20240620".to_string()
}

fn default_max_tokens() -> u32 {
    8192
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
            api_url: env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| default_api_url()),
            model: env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| default_model()),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}
