//! Infrastructure layer: category sources and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod di;
pub mod error;
pub mod traits;

pub use error::{SourceError, SourceResult};
pub use traits::{CategorySource, JsonFileSource, StaticSource};
