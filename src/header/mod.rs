//! Header data: the navigation categories shown in shared page chrome.
//!
//! DESIGN
//! ======
//! Layouts never reach for the catalog directly. They receive a
//! `HeaderDataProvider` and call it once per render, so the chrome can be
//! rendered against a live backend or a fixed category list alike. Nothing
//! here caches: every render performs its own retrieval.

pub mod http;

use serde::{Deserialize, Serialize};

pub use http::HttpHeaderDataProvider;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while retrieving header data.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The catalog backend could not be reached.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog backend answered with a non-success status.
    #[error("catalog responded with status {status}")]
    Status { status: u16, body: String },

    /// The catalog response could not be decoded into categories.
    #[error("invalid catalog payload: {0}")]
    InvalidPayload(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// DATA
// =============================================================================

/// A navigation category. Subcategories render as a nested menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub children: Vec<Category>,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), slug: slug.into(), children: Vec::new() }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.children = children;
        self
    }

    /// Storefront path for this category's listing.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/shop/{}", self.slug)
    }
}

/// Everything page chrome needs from the catalog for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    pub categories: Vec<Category>,
}

// =============================================================================
// PROVIDER
// =============================================================================

/// Source of header data for one page render.
#[async_trait::async_trait]
pub trait HeaderDataProvider: Send + Sync {
    /// Retrieve the header data. No retry happens at this layer.
    async fn get_header_data(&self) -> Result<HeaderData, RetrievalError>;
}

/// Provider that always returns the same categories.
///
/// Used when no catalog backend is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticHeaderDataProvider {
    data: HeaderData,
}

impl StaticHeaderDataProvider {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { data: HeaderData { categories } }
    }

    /// Built-in category tree served when running without a catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new("c-women", "Women", "women").with_children(vec![
                Category::new("c-women-dresses", "Dresses", "women-dresses"),
                Category::new("c-women-shoes", "Shoes", "women-shoes"),
            ]),
            Category::new("c-men", "Men", "men").with_children(vec![
                Category::new("c-men-shirts", "Shirts", "men-shirts"),
                Category::new("c-men-shoes", "Shoes", "men-shoes"),
            ]),
            Category::new("c-accessories", "Accessories", "accessories"),
        ])
    }
}

#[async_trait::async_trait]
impl HeaderDataProvider for StaticHeaderDataProvider {
    async fn get_header_data(&self) -> Result<HeaderData, RetrievalError> {
        Ok(self.data.clone())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
