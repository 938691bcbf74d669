use std::path::PathBuf;
use thiserror::Error;

/// Failures of the layers around the sorting core. The core itself is total.
#[derive(Error, Debug)]
pub enum PixelSortError {
    #[error("Unknown combiner {name:?}; known combiners: {known}")]
    UnknownCombiner { name: String, known: String },
    #[error("Failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Scoring worker failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, PixelSortError>;
