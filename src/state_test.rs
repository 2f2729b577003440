use super::test_helpers::*;
use super::*;

#[test]
fn new_wraps_catalog_in_arc() {
    let state = test_app_state(vec![dummy_article(1, Some("a"), "Cloud", &[])]);
    let catalog = state.catalog.as_ref().expect("catalog loaded");
    assert_eq!(catalog.len(), 1);
    assert_eq!(&*state.site_name, "Blogboard");
}

#[test]
fn failed_load_is_distinct_from_empty_catalog() {
    let unavailable = unavailable_app_state();
    assert!(unavailable.catalog.is_none());

    let empty = test_app_state(Vec::new());
    let catalog = empty.catalog.as_ref().expect("catalog loaded");
    assert!(catalog.is_empty());
}

#[test]
fn clone_shares_the_snapshot() {
    let state = test_app_state(vec![dummy_article(1, None, "DevOps", &[])]);
    let cloned = state.clone();
    let a = state.catalog.as_ref().expect("catalog");
    let b = cloned.catalog.as_ref().expect("catalog");
    assert!(Arc::ptr_eq(a, b));
}
