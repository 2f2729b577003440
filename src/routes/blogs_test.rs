use super::*;
use crate::catalog::Article;
use crate::state::test_helpers::{dummy_article, test_app_state, unavailable_app_state};

fn seeded_state(count: i64) -> AppState {
    let articles: Vec<Article> = (1..=count)
        .map(|id| {
            let slug = format!("post-{id}");
            let category = if id % 2 == 0 { "Cloud" } else { "DevOps" };
            dummy_article(id, Some(slug.as_str()), category, &["Kubernetes"])
        })
        .collect();
    test_app_state(articles)
}

async fn listing(state: AppState, category: Option<&str>, page: Option<usize>) -> ListingResponse {
    let params = ListingParams { category: category.map(str::to_string), page };
    list_blogs(State(state), Query(params)).await.0
}

// =============================================================================
// LISTING
// =============================================================================

#[tokio::test]
async fn listing_defaults_to_all_page_one() {
    let response = listing(seeded_state(8), None, None).await;
    assert!(response.available);
    assert_eq!(response.category, "all");
    assert_eq!(response.page, 1);
    assert_eq!(response.total, 8);
    assert_eq!(response.articles.len(), PAGE_SIZE);
    assert_eq!(response.articles[0].id, 1);
}

#[tokio::test]
async fn listing_second_page_holds_the_remainder() {
    let response = listing(seeded_state(8), None, Some(2)).await;
    assert_eq!(response.articles.len(), 2);
    assert_eq!(response.articles[0].id, 7);

    let pagination = response.pagination.expect("two pages");
    assert_eq!(pagination.page_count, 2);
    assert!(pagination.has_prev);
    assert!(!pagination.has_next);
    assert_eq!(pagination.window, vec![PageItem::Page(1), PageItem::Page(2)]);
}

#[tokio::test]
async fn listing_single_page_hides_pagination() {
    let response = listing(seeded_state(4), None, None).await;
    assert_eq!(response.articles.len(), 4);
    assert!(response.pagination.is_none());
}

#[tokio::test]
async fn listing_filters_by_category() {
    let response = listing(seeded_state(8), Some("Cloud"), None).await;
    assert_eq!(response.category, "Cloud");
    assert_eq!(response.total, 4);
    assert!(response.articles.iter().all(|c| c.category == "Cloud"));
    let ids: Vec<i64> = response.articles.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 4, 6, 8]);
}

#[tokio::test]
async fn listing_unknown_category_is_empty_but_available() {
    let response = listing(seeded_state(8), Some("Gardening"), None).await;
    assert!(response.available);
    assert_eq!(response.total, 0);
    assert!(response.articles.is_empty());
    assert!(response.pagination.is_none());
}

#[tokio::test]
async fn listing_beyond_range_page_is_empty() {
    let response = listing(seeded_state(8), None, Some(99)).await;
    assert!(response.articles.is_empty());
    // The control is still rendered so the user can navigate back.
    assert!(response.pagination.is_some());
}

#[tokio::test]
async fn listing_unavailable_catalog_renders_empty_state() {
    let response = listing(unavailable_app_state(), Some("Cloud"), Some(3)).await;
    assert!(!response.available);
    assert_eq!(response.total, 0);
    assert!(response.articles.is_empty());
    assert!(response.pagination.is_none());
}

#[tokio::test]
async fn listing_cards_link_to_detail_by_slug() {
    let response = listing(seeded_state(2), None, None).await;
    assert_eq!(response.articles[0].href, "blog-detail.html?slug=post-1");
}

// =============================================================================
// DETAIL
// =============================================================================

#[tokio::test]
async fn detail_resolves_by_slug() {
    let response = get_blog(State(seeded_state(8)), Path("post-3".to_string()))
        .await
        .expect("found");
    assert_eq!(response.0.article.id, 3);
    assert_eq!(response.0.seo.title, "Article 3 | Blogboard Blog");
}

#[tokio::test]
async fn detail_resolves_by_numeric_id() {
    let response = get_blog(State(seeded_state(8)), Path("5".to_string()))
        .await
        .expect("found");
    assert_eq!(response.0.article.id, 5);
}

#[tokio::test]
async fn detail_related_excludes_self_and_caps_at_three() {
    let response = get_blog(State(seeded_state(8)), Path("post-2".to_string()))
        .await
        .expect("found");
    let related = &response.0.related;
    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|c| c.id != 2));
    // Everything shares the "Kubernetes" tag, so dataset order wins.
    let ids: Vec<i64> = related.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn detail_unknown_key_is_not_found() {
    let err = get_blog(State(seeded_state(8)), Path("zzz".to_string()))
        .await
        .expect_err("not found");
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_unavailable_catalog_is_not_found() {
    let err = get_blog(State(unavailable_app_state()), Path("post-1".to_string()))
        .await
        .expect_err("not found");
    assert_eq!(err, StatusCode::NOT_FOUND);
}
