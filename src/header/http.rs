//! Catalog-backed header data provider.
//!
//! Thin HTTP wrapper around `GET {base}/categories`. Pure parsing in
//! `parse_categories` for testability.

use std::time::Duration;

use serde::Deserialize;

use super::{Category, HeaderData, HeaderDataProvider, RetrievalError};
use crate::config::CatalogTimeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpHeaderDataProvider {
    http: reqwest::Client,
    categories_url: String,
}

impl HttpHeaderDataProvider {
    /// Build a provider for the catalog at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str, timeouts: CatalogTimeouts) -> Result<Self, RetrievalError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RetrievalError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, categories_url: categories_url(base_url) })
    }

    #[must_use]
    pub fn categories_url(&self) -> &str {
        &self.categories_url
    }
}

#[async_trait::async_trait]
impl HeaderDataProvider for HttpHeaderDataProvider {
    async fn get_header_data(&self) -> Result<HeaderData, RetrievalError> {
        let response = self
            .http
            .get(&self.categories_url)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %self.categories_url, error = %e, "catalog request failed");
                RetrievalError::Unavailable(e.to_string())
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RetrievalError::Unavailable(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(url = %self.categories_url, status, "catalog returned error status");
            return Err(RetrievalError::Status { status, body: text });
        }

        let categories = parse_categories(&text)?;
        tracing::debug!(count = categories.len(), "header categories retrieved");
        Ok(HeaderData { categories })
    }
}

fn categories_url(base_url: &str) -> String {
    format!("{}/categories", base_url.trim_end_matches('/'))
}

// =============================================================================
// PARSING
// =============================================================================

/// The catalog answers either with a bare array or a wrapped object.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesBody {
    Bare(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

fn parse_categories(json: &str) -> Result<Vec<Category>, RetrievalError> {
    let body: CategoriesBody =
        serde_json::from_str(json).map_err(|e| RetrievalError::InvalidPayload(e.to_string()))?;
    Ok(match body {
        CategoriesBody::Bare(categories) | CategoriesBody::Wrapped { categories } => categories,
    })
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
