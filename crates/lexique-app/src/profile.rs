use std::env;
use std::fs;
use std::path::Path;

use lexique_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Load the profile at `path`, creating it from defaults and environment
/// variables when it does not exist yet
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return create_profile(path, Config::new());
    }

    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)?;
    tracing::debug!("Loaded profile '{}' from {}", profile.name, path.display());

    let mut config = profile.value;
    fill_from_env(&mut config);
    Ok(config)
}

/// Write `config` as a new profile. The API key stays out of the file and is
/// read from the environment on every load.
pub fn create_profile(path: &Path, config: Config) -> anyhow::Result<Config> {
    let mut stored = config.clone();
    stored.generator.api_key.clear();
    let profile = Profile {
        name: "main".into(),
        value: stored,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Created profile {}", path.display());

    Ok(config)
}

/// Secrets left blank in the profile come from the environment
fn fill_from_env(config: &mut Config) {
    if config.generator.api_key.is_empty() {
        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            config.generator.api_key = key;
        }
    }
}
