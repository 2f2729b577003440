//! Listing and detail queries over the article catalog.
//!
//! DESIGN
//! ======
//! Everything in this module is pure and synchronous: the catalog snapshot
//! goes in, borrowed sublists and view data come out. Listing state (current
//! category, current page) is threaded through as explicit parameters so the
//! route layer stays a thin translation shim.

use crate::catalog::Article;

/// Articles shown per listing page.
pub const PAGE_SIZE: usize = 6;

/// Related articles shown under the detail view.
pub const RELATED_LIMIT: usize = 3;

/// Page windows stay contiguous up to this many total pages; above it the
/// window collapses to pinned first/last pages around the current page.
const WINDOW_CONTIGUOUS_MAX: usize = 7;

// =============================================================================
// CATEGORY FILTER
// =============================================================================

/// Category selector for the listing view. `All` is the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    One(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::One(raw.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::One(category) => category,
        }
    }
}

/// Return the articles matching the selector, preserving dataset order.
///
/// An empty result means no category match; "dataset never loaded" is the
/// caller's condition, not this one.
#[must_use]
pub fn filter_by_category<'a>(articles: &'a [Article], filter: &CategoryFilter) -> Vec<&'a Article> {
    match filter {
        CategoryFilter::All => articles.iter().collect(),
        CategoryFilter::One(category) => articles.iter().filter(|a| &a.category == category).collect(),
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Return the 1-based `page` slice of `list`, clipped to bounds.
///
/// Page 0 and pages beyond the range yield an empty slice; navigation
/// controls are expected to clamp rather than rely on this.
#[must_use]
pub fn paginate<T>(list: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size).min(list.len());
    let end = start.saturating_add(size).min(list.len());
    &list[start..end]
}

/// Total page count: ceil(len / size). Zero items means zero pages.
#[must_use]
pub fn page_count(len: usize, size: usize) -> usize {
    len.div_ceil(size)
}

/// One entry in the abbreviated page-number control.
///
/// Serializes as the page number itself, or the string `"..."` for an
/// ellipsis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl serde::Serialize for PageItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Compute the page-number window for the pagination control.
///
/// Up to 7 total pages render contiguously. Beyond that: page 1 is always
/// pinned, an ellipsis appears when the current page has moved past 3, the
/// window `[max(2, current-1), min(total-1, current+1)]` tracks the current
/// page, a second ellipsis appears while the current page is short of
/// `total - 2`, and the last page is always pinned. The interior range is
/// clamped inside `2..=total-1`, so pinned pages are never duplicated.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    if total <= WINDOW_CONTIGUOUS_MAX {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    let low = current.saturating_sub(1).max(2);
    let high = current.saturating_add(1).min(total - 1);
    items.extend((low..=high).map(PageItem::Page));

    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total));
    items
}

// =============================================================================
// DETAIL QUERIES
// =============================================================================

/// Resolve an article by the addressing key carried in the page URL.
///
/// A record matches when its slug equals the key, or when the key parses as
/// an integer equal to its id. The disjunction is evaluated per record in
/// dataset order, so an id match on an earlier record wins over a slug match
/// on a later one. An empty key never matches.
#[must_use]
pub fn resolve<'a>(articles: &'a [Article], key: &str) -> Option<&'a Article> {
    if key.is_empty() {
        return None;
    }
    let id = key.parse::<i64>().ok();
    articles
        .iter()
        .find(|a| a.slug.as_deref() == Some(key) || id.is_some_and(|id| a.id == id))
}

/// Select up to [`RELATED_LIMIT`] articles related to `current`, in dataset
/// order: same category, or at least one shared tag. `current` itself is
/// excluded by id.
#[must_use]
pub fn related<'a>(current: &Article, articles: &'a [Article]) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| {
            a.id != current.id
                && (a.category == current.category || a.tags.iter().any(|t| current.tags.contains(t)))
        })
        .take(RELATED_LIMIT)
        .collect()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
