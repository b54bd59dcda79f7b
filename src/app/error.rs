use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MillraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse feed file {path}: {source}")]
    FeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid site file name: {0}")]
    InvalidSiteFile(PathBuf),

    #[error("Fetcher error: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MillraceError>;
