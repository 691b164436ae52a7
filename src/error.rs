//! Playlet Finder Error Types
//!
//! Every fault the run can hit at its boundary, one variant per kind.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for Playlet Finder
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ranking request failed: {0}")]
    Network(String),

    #[error("Ranking response malformed: {0}")]
    Payload(String),

    #[error("Dataset file not found: {}", .0.display())]
    DatasetMissing(PathBuf),

    #[error("Dataset error at line {line}: {message}")]
    Dataset { line: u64, message: String },

    #[error("Could not write report to {}: {message}", .path.display())]
    Report { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Playlet Finder operations
pub type FinderResult<T> = Result<T, FinderError>;

impl From<reqwest::Error> for FinderError {
    fn from(err: reqwest::Error) -> Self {
        FinderError::Network(err.to_string())
    }
}

impl From<csv::Error> for FinderError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        FinderError::Dataset {
            line,
            message: err.to_string(),
        }
    }
}
