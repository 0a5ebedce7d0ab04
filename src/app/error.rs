use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    /// Rejected input: empty title/content, unknown reaction symbol,
    /// unrecognized sort key.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure while writing the article document.
///
/// Mutations stay applied in memory when this occurs; the store logs it
/// and hands it to the UI layer as a warning rather than rolling back.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("failed to write article data at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize article data: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LensError>;
