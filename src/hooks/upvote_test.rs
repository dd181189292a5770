use super::*;

#[test]
fn modified_vote_invalidates_both_shared_collections() {
    let mut cache = ProductCache::default();
    let featured = cache.featured.begin_fetch();
    cache.featured.apply(featured, Ok(Vec::new()));
    let trending = cache.trending.begin_fetch();
    cache.trending.apply(trending, Ok(Vec::new()));

    apply_vote_outcome(&mut cache, UpdateOutcome::Modified);
    assert!(cache.featured.needs_fetch());
    assert!(cache.trending.needs_fetch());
}

#[test]
fn unchanged_vote_leaves_collections_alone() {
    let mut cache = ProductCache::default();
    let featured = cache.featured.begin_fetch();
    cache.featured.apply(featured, Ok(Vec::new()));
    let trending = cache.trending.begin_fetch();
    cache.trending.apply(trending, Ok(Vec::new()));

    apply_vote_outcome(&mut cache, UpdateOutcome::Unchanged);
    assert!(!cache.featured.needs_fetch());
    assert!(!cache.trending.needs_fetch());
}

#[test]
fn collection_kind_selects_matching_collection() {
    let mut cache = ProductCache::default();
    cache.featured.begin_fetch();
    assert!(CollectionKind::Featured.select(&cache).loading);
    assert!(!CollectionKind::Trending.select(&cache).loading);
    CollectionKind::Trending.select_mut(&mut cache).begin_fetch();
    assert!(CollectionKind::Trending.select(&cache).loading);
}
