// Common error types for relver

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for relver operations.
///
/// Every failure is surfaced to the caller immediately; there is no retry
/// and no default-value fallback. A build step consuming this crate is
/// expected to abort on the first error.
#[derive(Debug, Error)]
pub enum RelverError {
    /// A version string is not a 3-component dotted-integer triplet.
    #[error("Invalid version format: {0} (expected a 3 component version of format #.#.#)")]
    Format(String),

    /// The backing properties file is missing, unreadable, or lacks the
    /// required version key.
    #[error("Failed to load {}: {reason}", .path.display())]
    Load {
        /// File that could not be loaded
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// The backing properties file could not be rewritten.
    #[error("Failed to write {}: {reason}", .path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Why writing failed
        reason: String,
    },

    /// I/O failure outside the load/write paths.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON response serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelverError>;
