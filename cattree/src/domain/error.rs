//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors raised while normalizing a category tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("category tree nested deeper than {max_depth} levels (at category {id})")]
    DepthExceeded { id: i64, max_depth: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
