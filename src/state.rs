//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable catalog snapshot behind an `Arc`; `None` means the
//! dataset failed to load at startup and every view renders its empty state.
//! Per-request listing state (category, page) lives in query parameters, not
//! here.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state. Clone is required by Axum; inner fields are
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the dataset failed to load. Distinct from a loaded
    /// catalog with zero articles.
    pub catalog: Option<Arc<Catalog>>,
    /// Site name composed into detail-page titles.
    pub site_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Option<Catalog>, site_name: &str) -> Self {
        Self { catalog: catalog.map(Arc::new), site_name: Arc::from(site_name) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
