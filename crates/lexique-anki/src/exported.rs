use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lexique_core::{headword_key, normalize};
use lexique_core::persist::write_atomic;

/// Keys of records already sent to a flashcard deck, kept across runs as a
/// JSON list of strings.
#[derive(Debug, Clone)]
pub struct ExportedKeys {
    path: PathBuf,
    keys: BTreeSet<String>,
}

impl ExportedKeys {
    /// Read the key file; a missing file is an empty set
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let keys = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let listed: Vec<String> = serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            // older files hold lowercased words rather than normalized keys
            listed.iter().map(|word| normalize(word)).collect()
        } else {
            BTreeSet::new()
        };

        tracing::debug!("Loaded {} exported keys from {}", keys.len(), path.display());
        Ok(Self { path, keys })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.keys.contains(&headword_key(word))
    }

    /// Merge `newly_exported` and rewrite the key file
    pub fn record(&mut self, newly_exported: impl IntoIterator<Item = String>) -> Result<()> {
        self.keys.extend(newly_exported);
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        let listed: Vec<&String> = self.keys.iter().collect();
        let data = serde_json::to_string_pretty(&listed)?;
        write_atomic(&self.path, &data)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let keys = ExportedKeys::load(dir.path().join("exported_words.json")).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exported_words.json");

        let mut keys = ExportedKeys::load(&path).unwrap();
        keys.record(["abeille".to_string(), "ecole".to_string()]).unwrap();

        let reloaded = ExportedKeys::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("École"));
        assert!(!reloaded.contains("chat"));
    }

    #[test]
    fn legacy_lowercase_words_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exported_words.json");
        fs::write(&path, r#"["agaçante", "élève"]"#).unwrap();

        let keys = ExportedKeys::load(&path).unwrap();
        assert!(keys.keys().contains("agacante"));
        assert!(keys.contains("Élève"));
    }
}
