use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a deck run.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Frequency cache {path} is not a JSON object, leaving it untouched: {source}")]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Word list not found: {0}")]
    MissingWordList(PathBuf),

    #[error("Could not find a project root containing a decks/ directory above {0}")]
    ProjectRootNotFound(PathBuf),
}

impl DeckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeckError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        DeckError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// A single failed frequency lookup. Never fatal; the resolver turns it into a
/// negative cache entry.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(u16),

    #[error("non-numeric total {0:?}")]
    InvalidTotal(String),

    #[error("negative hit count {0}")]
    NegativeHits(i64),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
