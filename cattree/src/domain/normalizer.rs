//! Normalizer turning catalog categories into the storefront display tree.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::entities::{Category, CategoryListElement};
use crate::domain::error::{DomainError, DomainResult};

/// Marks a root title as requested for the home page, anywhere in the title.
pub const HOME_MARKER: char = '#';

/// Default nesting limit for catalog trees.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Rules selecting which root categories are shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePolicy {
    /// Up to this many root categories, all of them are shown
    pub show_all_threshold: usize,
    /// Number of leading categories shown when none is marked
    pub fallback_count: usize,
}

impl Default for HomePolicy {
    fn default() -> Self {
        Self {
            show_all_threshold: 5,
            fallback_count: 3,
        }
    }
}

/// Recursively orders a category tree and flags root categories for the home page.
#[derive(Debug, Clone)]
pub struct TreeNormalizer {
    order_prefix: Regex,
    policy: HomePolicy,
    max_depth: usize,
}

impl Default for TreeNormalizer {
    fn default() -> Self {
        Self::new(HomePolicy::default())
    }
}

impl TreeNormalizer {
    pub fn new(policy: HomePolicy) -> Self {
        Self {
            // ASCII only: `\d` would also match non-latin digits
            order_prefix: Regex::new(r"^([0-9]+)").expect("order prefix regex is valid"),
            policy,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sort key of a category.
    ///
    /// A digit run at the very start of the title wins (`"3# Bags"` → 3);
    /// otherwise, or if the number does not fit an `i64`, the id is used.
    pub fn order_key(&self, category: &Category) -> i64 {
        self.order_prefix
            .captures(&category.title)
            .and_then(|caps| caps.get(1))
            .and_then(|digits| digits.as_str().parse::<i64>().ok())
            .unwrap_or(category.id)
    }

    /// Normalize a root-level category list.
    #[instrument(level = "debug", skip_all, fields(roots = categories.len()))]
    pub fn normalize(&self, categories: &[Category]) -> DomainResult<Vec<CategoryListElement>> {
        let result = self.process_categories(categories, 0)?;
        debug!(
            "normalize: {} of {} root categories shown on home",
            result.iter().filter(|c| c.show_on_home).count(),
            result.len()
        );
        Ok(result)
    }

    /// Build the display list for one sibling list, children first.
    ///
    /// Home flags are only computed at depth 0.
    fn process_categories(
        &self,
        categories: &[Category],
        depth: usize,
    ) -> DomainResult<Vec<CategoryListElement>> {
        let mut marked = HashSet::new();
        let mut result = Vec::with_capacity(categories.len());

        for category in categories {
            if depth >= self.max_depth {
                return Err(DomainError::DepthExceeded {
                    id: category.id,
                    max_depth: self.max_depth,
                });
            }
            if depth == 0 && category.title.contains(HOME_MARKER) {
                marked.insert(category.id);
            }

            let order = self.order_key(category);
            trace!("depth {}: category {} -> order {}", depth, category.id, order);
            let children = self.process_categories(&category.children, depth + 1)?;

            result.push(CategoryListElement {
                id: category.id,
                name: category.name.clone(),
                image: category.meta_description.clone(),
                order,
                children,
                show_on_home: false,
            });
        }

        // stable: equal orders keep catalog order
        result.sort_by_key(|c| c.order);

        if depth == 0 {
            apply_home_flags(&mut result, &marked, &self.policy);
        }
        Ok(result)
    }
}

/// Set `show_on_home` on sorted root categories.
///
/// 1. at most `show_all_threshold` categories: all shown
/// 2. otherwise, if any id is marked: exactly the marked ones
/// 3. otherwise: the first `fallback_count`
pub fn apply_home_flags(
    categories: &mut [CategoryListElement],
    marked: &HashSet<i64>,
    policy: &HomePolicy,
) {
    let total = categories.len();
    for (index, category) in categories.iter_mut().enumerate() {
        category.show_on_home = if total <= policy.show_all_threshold {
            true
        } else if !marked.is_empty() {
            marked.contains(&category.id)
        } else {
            index < policy.fallback_count
        };
    }
}
