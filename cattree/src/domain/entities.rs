//! Domain entities: raw catalog categories and their display form

use serde::{Deserialize, Serialize};

/// Category as delivered by the catalog service.
///
/// Field names follow the catalog payload (`Title`, `MetaTagDescription`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique within its sibling list only
    pub id: i64,
    pub name: String,
    /// Hint from the catalog, `children` is authoritative
    #[serde(rename = "hasChildren", default)]
    pub has_children: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form title, may start with an explicit order number (`"2 Shoes"`, `"3# Bags"`)
    #[serde(rename = "Title")]
    pub title: String,
    /// Reused as the display image
    #[serde(rename = "MetaTagDescription", alias = "metaDescription")]
    pub meta_description: String,
    #[serde(default)]
    pub children: Vec<Category>,
}

impl Category {
    /// Leaf category whose image text defaults to its name.
    pub fn new(id: i64, name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            meta_description: name.clone(),
            name,
            has_children: false,
            url: None,
            title: title.into(),
            children: Vec::new(),
        }
    }

    pub fn with_meta_description(mut self, meta_description: impl Into<String>) -> Self {
        self.meta_description = meta_description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }
}

/// Payload returned by a category source.
///
/// `data` is `None` when the catalog omits the collection or sends `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub data: Option<Vec<Category>>,
}

impl CategoriesResponse {
    pub fn new(data: Vec<Category>) -> Self {
        Self { data: Some(data) }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }
}

/// Category prepared for the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListElement {
    pub id: i64,
    pub name: String,
    pub image: String,
    /// Sort key among siblings
    pub order: i64,
    /// Sorted by `order`, ascending
    pub children: Vec<CategoryListElement>,
    /// Only ever `true` on root-level elements
    pub show_on_home: bool,
}
