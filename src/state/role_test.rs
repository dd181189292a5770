use super::*;

#[test]
fn begin_claims_fetch_exactly_once_per_identity() {
    let mut cache = RoleCache::default();
    assert!(cache.begin("a@x.com"));
    assert!(!cache.begin("a@x.com"));
    assert!(cache.begin("b@x.com"));
}

#[test]
fn absent_identity_issues_no_query_and_is_not_loading() {
    let cache = RoleCache::default();
    let view = cache.view(None);
    assert_eq!(view, RoleView { role: None, loading: false });
}

#[test]
fn unclaimed_identity_reports_loading() {
    let cache = RoleCache::default();
    let view = cache.view(Some("a@x.com"));
    assert_eq!(view, RoleView { role: None, loading: true });
}

#[test]
fn pending_fetch_reports_loading() {
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    assert!(cache.view(Some("a@x.com")).loading);
}

#[test]
fn resolved_role_is_returned_without_loading() {
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", Some(Role::Admin));
    let view = cache.view(Some("a@x.com"));
    assert_eq!(view, RoleView { role: Some(Role::Admin), loading: false });
}

#[test]
fn failed_fetch_is_fail_closed() {
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", None);
    let view = cache.view(Some("a@x.com"));
    assert_eq!(view, RoleView { role: None, loading: false });
}

#[test]
fn completion_after_invalidation_is_dropped() {
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.invalidate_all();
    cache.complete("a@x.com", Some(Role::Admin));
    // The next identity claim starts fresh instead of reusing the stray result.
    assert!(cache.begin("a@x.com"));
    assert!(cache.view(Some("a@x.com")).loading);
}

#[test]
fn invalidate_all_forces_refetch() {
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", Some(Role::Moderator));
    cache.invalidate_all();
    assert!(cache.begin("a@x.com"));
}
