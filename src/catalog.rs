//! Article dataset loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to read and parse the static JSON dataset before
//! the listener binds. The parsed catalog is an immutable snapshot for the
//! process lifetime. A failed load is terminal: the caller keeps running with
//! no catalog and every view surfaces the empty/not-found state instead.

use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// One blog entry in the dataset. Field names mirror the JSON document
/// (camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    /// Unique human-readable identifier, preferred over `id` in URLs.
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// HTML body.
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    /// ISO `YYYY-MM-DD` publish date.
    pub date: String,
    /// Display string, e.g. "5 min read".
    pub read_time: String,
    pub image: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the dataset document: `{"blogs": [...]}`.
#[derive(Deserialize)]
struct DatasetFile {
    blogs: Vec<Article>,
}

/// Immutable in-memory snapshot of the ordered article list.
#[derive(Debug, Default)]
pub struct Catalog {
    pub articles: Vec<Article>,
}

impl Catalog {
    /// Parse a dataset document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the bytes are not a valid dataset document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let file: DatasetFile = serde_json::from_slice(bytes)?;
        Ok(Self { articles: file.blogs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Read and parse the dataset file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub async fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let bytes = tokio::fs::read(path).await?;
    Catalog::from_slice(&bytes)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
