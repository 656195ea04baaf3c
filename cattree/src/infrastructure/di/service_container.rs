//! Service container for dependency injection
//!
//! Wires up the category tree service with its source and settings.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::services::CategoryTreeService;
use crate::config::Settings;
use crate::infrastructure::traits::{CategorySource, JsonFileSource};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Category source abstraction
    pub source: Arc<dyn CategorySource>,

    pub category_tree: CategoryTreeService,
}

impl ServiceContainer {
    /// Create a container reading categories from a JSON file.
    pub fn new(settings: Settings, input: impl Into<PathBuf>) -> Self {
        Self::with_source(settings, Arc::new(JsonFileSource::new(input)))
    }

    /// Create a container with a custom source (for testing).
    pub fn with_source(settings: Settings, source: Arc<dyn CategorySource>) -> Self {
        let settings = Arc::new(settings);
        let category_tree = CategoryTreeService::new(Arc::clone(&source), settings.normalizer());

        Self {
            settings,
            source,
            category_tree,
        }
    }
}
