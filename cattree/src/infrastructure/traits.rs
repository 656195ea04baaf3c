//! I/O boundary traits for testability
//!
//! The category tree is always obtained through a [`CategorySource`], so the
//! normalizing service can be tested with fixtures instead of a catalog.

use std::future::Future;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::CategoriesResponse;
use crate::infrastructure::error::{SourceError, SourceResult};

/// Accessor for the raw category tree.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch the raw tree. Called once per normalization.
    async fn get_categories(&self) -> SourceResult<CategoriesResponse>;
}

/// Any `Fn() -> impl Future` returning a response is a source:
///
/// ```ignore
/// let source = || async { Ok::<_, SourceError>(CategoriesResponse::new(vec![])) };
/// ```
#[async_trait]
impl<F, Fut> CategorySource for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = SourceResult<CategoriesResponse>> + Send,
{
    async fn get_categories(&self) -> SourceResult<CategoriesResponse> {
        (self)().await
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads a catalog response (`{"data": [...]}`) from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CategorySource for JsonFileSource {
    async fn get_categories(&self) -> SourceResult<CategoriesResponse> {
        debug!("get_categories: path={}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_response(&content).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parse a catalog response of any nesting depth.
///
/// serde_json's recursion limit (128 levels, i.e. 64 category levels) is lifted;
/// the stack grows on the heap instead. Nesting is capped by the normalizer.
fn parse_response(content: &str) -> serde_json::Result<CategoriesResponse> {
    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    let response = CategoriesResponse::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(response)
}

/// Serves a fixed response, e.g. a canned catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    response: CategoriesResponse,
}

impl StaticSource {
    pub fn new(response: CategoriesResponse) -> Self {
        Self { response }
    }
}

#[async_trait]
impl CategorySource for StaticSource {
    async fn get_categories(&self) -> SourceResult<CategoriesResponse> {
        Ok(self.response.clone())
    }
}
