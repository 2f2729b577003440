//! Blog listing and detail routes.
//!
//! ERROR HANDLING
//! ==============
//! Two terminal conditions only, per the original site: a dataset that never
//! loaded (the listing answers with its empty state, the detail view with
//! not-found) and a lookup key that resolves to nothing (not-found). Neither
//! is retried and neither propagates past the current response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::cards::{self, ArticleView, CardView, SeoView};
use crate::query::{self, CategoryFilter, PAGE_SIZE, PageItem};
use crate::state::AppState;

// =============================================================================
// LISTING
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    /// Category selector; absent means "all".
    pub category: Option<String>,
    /// 1-based page number; absent means page 1.
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub page: usize,
    pub page_count: usize,
    pub window: Vec<PageItem>,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    /// False when the dataset failed to load; the grid renders empty.
    pub available: bool,
    pub category: String,
    pub page: usize,
    /// Filtered length, before pagination.
    pub total: usize,
    pub articles: Vec<CardView>,
    /// `None` hides the control entirely (one page or fewer).
    pub pagination: Option<PaginationView>,
}

impl ListingResponse {
    fn unavailable(filter: &CategoryFilter, page: usize) -> Self {
        Self {
            available: false,
            category: filter.as_str().to_string(),
            page,
            total: 0,
            articles: Vec::new(),
            pagination: None,
        }
    }
}

/// `GET /api/blogs` — one page of the (optionally filtered) listing.
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Json<ListingResponse> {
    let filter = CategoryFilter::parse(params.category.as_deref().unwrap_or("all"));
    let page = params.page.unwrap_or(1);

    let Some(catalog) = &state.catalog else {
        return Json(ListingResponse::unavailable(&filter, page));
    };

    let filtered = query::filter_by_category(&catalog.articles, &filter);
    let total = filtered.len();
    let page_count = query::page_count(total, PAGE_SIZE);

    let articles = query::paginate(&filtered, page, PAGE_SIZE)
        .iter()
        .map(|article| cards::card_view(article))
        .collect();

    let pagination = (page_count > 1).then(|| PaginationView {
        page,
        page_count,
        window: query::page_window(page, page_count),
        has_prev: page > 1,
        has_next: page < page_count,
    });

    Json(ListingResponse {
        available: true,
        category: filter.as_str().to_string(),
        page,
        total,
        articles,
        pagination,
    })
}

// =============================================================================
// DETAIL
// =============================================================================

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub article: ArticleView,
    /// Up to three same-category or shared-tag articles, dataset order.
    pub related: Vec<CardView>,
    pub seo: SeoView,
}

/// `GET /api/blogs/{key}` — resolve one article by slug or numeric id.
pub async fn get_blog(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DetailResponse>, StatusCode> {
    let catalog = state.catalog.as_ref().ok_or(StatusCode::NOT_FOUND)?;
    let article = query::resolve(&catalog.articles, &key).ok_or(StatusCode::NOT_FOUND)?;

    let related = query::related(article, &catalog.articles)
        .into_iter()
        .map(|a| cards::card_view(a))
        .collect();

    Ok(Json(DetailResponse {
        article: cards::article_view(article),
        related,
        seo: cards::seo_view(article, &state.site_name),
    }))
}

#[cfg(test)]
#[path = "blogs_test.rs"]
mod tests;
