//! Static page content keyed by language.
//!
//! `CommitmentData` is supplied externally (a JSON file or inline data);
//! this module only owns its shape and lookup rules.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors produced while loading content files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One store commitment, e.g. "Free returns" with a short explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentItem {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
impl CommitmentItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// Language code -> ordered commitments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitmentData(BTreeMap<String, Vec<CommitmentItem>>);

impl CommitmentData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse commitment data from a JSON object keyed by language.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load commitment data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn items(&self, lang: &str) -> Option<&[CommitmentItem]> {
        self.0.get(lang).map(Vec::as_slice)
    }

    /// Items for `lang`, falling back to `fallback`, then to nothing.
    ///
    /// Also returns the language actually served: `lang` only when it has
    /// an entry, `fallback` otherwise.
    #[must_use]
    pub fn items_or_fallback<'a>(&'a self, lang: &'a str, fallback: &'a str) -> (&'a str, &'a [CommitmentItem]) {
        match self.items(lang) {
            Some(items) => (lang, items),
            None => (fallback, self.items(fallback).unwrap_or_default()),
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
impl CommitmentData {
    /// Replace the items for `lang`.
    pub fn insert(&mut self, lang: impl Into<String>, items: Vec<CommitmentItem>) {
        self.0.insert(lang.into(), items);
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
