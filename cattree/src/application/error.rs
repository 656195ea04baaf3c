//! Application-level errors (wraps domain and source errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::SourceError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Category source failures pass through untouched.
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
