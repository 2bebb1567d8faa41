///! Error types for dataset loading
///!
///! Data-integrity oddities (orphan approaches, duplicate designations,
///! missing names or diameters) are tolerated and never reach this enum.
///! Only records the query engine cannot work with at all fail the load.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, Error>;

/// Loader errors
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding error
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A data row the loaders cannot normalize away
    #[error("record {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The close-approach document lacks a required column
    #[error("close-approach dataset has no '{0}' field")]
    MissingField(&'static str),

    /// Timestamp not in the compact calendar form, e.g. "1900-Jan-01 00:00"
    #[error("invalid close-approach timestamp: {0:?}")]
    BadTimestamp(String),

    /// HTTP request error while fetching a dataset
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status while fetching a dataset
    #[error("download failed: HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl Error {
    /// Create a malformed-record error for a 1-based data row
    pub fn malformed_record(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            row,
            reason: reason.into(),
        }
    }

    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
