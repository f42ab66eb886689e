use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record region not found: missing {missing}")]
    RegionNotFound { missing: &'static str },

    #[error("Malformed record at line {line}: {reason}\n{snippet}")]
    MalformedRecord {
        line: usize,
        offset: usize,
        reason: String,
        snippet: String,
    },

    #[error("Content loss guard tripped: rebuilt document is {rebuilt} bytes, original {original}")]
    ContentLossGuardTripped { original: usize, rebuilt: usize },

    #[error("'{word}' already exists as '{existing}'")]
    DuplicateKey { word: String, existing: String },

    #[error("Invalid record '{headword}': {reason}")]
    InvalidRecord { headword: String, reason: String },

    #[error("No record with headword '{0}'")]
    RecordNotFound(String),

    #[error("Invalid headword: {0}")]
    InvalidHeadword(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
