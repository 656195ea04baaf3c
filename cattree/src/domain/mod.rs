//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod normalizer;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use normalizer::{apply_home_flags, HomePolicy, TreeNormalizer, DEFAULT_MAX_DEPTH, HOME_MARKER};
