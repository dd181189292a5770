use super::*;
use crate::net::types::ProductStatus;

fn product(id: &str, upvote: i64) -> Product {
    Product {
        id: id.to_owned(),
        product_name: "Widget".to_owned(),
        product_image: "https://img.example/w.png".to_owned(),
        description: String::new(),
        external_link: None,
        tags: Vec::new(),
        owner_name: "Alice".to_owned(),
        owner_email: "alice@example.com".to_owned(),
        owner_image: None,
        status: ProductStatus::Accepted,
        featured: true,
        upvote,
        voted_users: Vec::new(),
        created_at: None,
    }
}

#[test]
fn fresh_collection_needs_fetch() {
    let state = CollectionState::default();
    assert!(state.needs_fetch());
}

#[test]
fn begin_fetch_claims_token_and_stops_further_fetches() {
    let mut state = CollectionState::default();
    let token = state.begin_fetch();
    assert!(state.loading);
    assert!(!state.needs_fetch());
    assert!(state.apply(token, Ok(vec![product("p1", 1)])));
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert!(!state.needs_fetch());
}

#[test]
fn superseded_response_is_discarded() {
    let mut state = CollectionState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    // The older request resolves after the newer one claimed the epoch.
    assert!(!state.apply(first, Ok(vec![product("old", 1)])));
    assert!(state.items.is_empty());
    assert!(state.apply(second, Ok(vec![product("new", 2)])));
    assert_eq!(state.items[0].id, "new");
}

#[test]
fn response_after_invalidation_is_discarded() {
    let mut state = CollectionState::default();
    let token = state.begin_fetch();
    state.invalidate();
    assert!(!state.apply(token, Ok(vec![product("stale", 1)])));
    assert!(state.items.is_empty());
    assert!(state.needs_fetch());
}

#[test]
fn failed_fetch_keeps_previous_items_and_records_error() {
    let mut state = CollectionState::default();
    let token = state.begin_fetch();
    state.apply(token, Ok(vec![product("p1", 1)]));
    let token = state.begin_fetch();
    assert!(state.apply(token, Err("network failure".to_owned())));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("network failure"));
}

#[test]
fn invalidate_shared_marks_both_collections() {
    let mut cache = ProductCache::default();
    let featured = cache.featured.begin_fetch();
    cache.featured.apply(featured, Ok(vec![product("f1", 1)]));
    let trending = cache.trending.begin_fetch();
    cache.trending.apply(trending, Ok(vec![product("t1", 5)]));
    assert!(!cache.featured.needs_fetch());
    assert!(!cache.trending.needs_fetch());

    cache.invalidate_shared();
    assert!(cache.featured.needs_fetch());
    assert!(cache.trending.needs_fetch());
    // Cached items stay readable during the staleness window.
    assert_eq!(cache.featured.items[0].id, "f1");
}
