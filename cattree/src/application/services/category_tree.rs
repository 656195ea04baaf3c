//! Category tree service
//!
//! Fetches the raw catalog tree once and turns it into the storefront tree.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{CategoryListElement, TreeNormalizer};
use crate::infrastructure::traits::CategorySource;

/// Service producing the normalized category tree from an injected source.
pub struct CategoryTreeService {
    source: Arc<dyn CategorySource>,
    normalizer: TreeNormalizer,
}

impl CategoryTreeService {
    /// Create a new category tree service.
    pub fn new(source: Arc<dyn CategorySource>, normalizer: TreeNormalizer) -> Self {
        Self { source, normalizer }
    }

    /// Fetch and normalize the category tree.
    ///
    /// See [`category_tree`].
    pub async fn category_tree(&self) -> ApplicationResult<Vec<CategoryListElement>> {
        category_tree(self.source.as_ref(), &self.normalizer).await
    }
}

/// Fetch the raw tree from `source` exactly once and normalize it.
///
/// A response without `data` yields an empty list. Source errors are
/// returned as they are, without retry.
#[instrument(level = "debug", skip_all)]
pub async fn category_tree(
    source: &dyn CategorySource,
    normalizer: &TreeNormalizer,
) -> ApplicationResult<Vec<CategoryListElement>> {
    let response = source.get_categories().await?;
    let Some(data) = response.data else {
        debug!("category_tree: response has no data");
        return Ok(Vec::new());
    };
    debug!("category_tree: {} root categories", data.len());

    Ok(normalizer.normalize(&data)?)
}
