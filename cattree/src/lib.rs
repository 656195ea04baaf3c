//! cattree: turns a catalog category tree into the ordered tree shown by a
//! storefront, with root categories flagged for the home page.
//!
//! The category tree is obtained from an injected
//! [`CategorySource`](infrastructure::CategorySource) and normalized by
//! [`TreeNormalizer`](domain::TreeNormalizer).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use application::services::{category_tree, CategoryTreeService};
pub use domain::{CategoriesResponse, Category, CategoryListElement, HomePolicy, TreeNormalizer};
