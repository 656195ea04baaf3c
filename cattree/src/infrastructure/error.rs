//! Errors raised by category sources

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a category source to deliver the raw tree.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("read categories from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse categories from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("category source unavailable: {message}")]
    Unavailable { message: String },
}

impl SourceError {
    /// Create an unavailable error, e.g. from a remote catalog client.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Result type for category sources.
pub type SourceResult<T> = Result<T, SourceError>;
