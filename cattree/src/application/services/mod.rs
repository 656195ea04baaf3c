//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (CategorySource)
//! but are themselves concrete structs, not traits.

mod category_tree;

pub use category_tree::{category_tree, CategoryTreeService};
