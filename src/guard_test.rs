use super::*;
use crate::net::types::Identity;
use crate::state::role::RoleCache;

fn signed_out() -> SessionStore {
    let mut store = SessionStore::default();
    store.finish_restore(None);
    store
}

fn signed_in(email: &str) -> SessionStore {
    let mut store = SessionStore::default();
    store.finish_restore(Some(Identity {
        email: email.to_owned(),
        name: "Test User".to_owned(),
        photo_url: None,
    }));
    store
}

fn role_view(cache: &RoleCache, store: &SessionStore) -> RoleView {
    cache.view(store.email())
}

// =============================================================
// Auth guard
// =============================================================

#[test]
fn auth_guard_pending_while_session_restores() {
    let store = SessionStore::default();
    assert_eq!(evaluate_auth_guard(&store, "/dashboard/userProfile"), GuardDecision::Pending);
}

#[test]
fn auth_guard_allows_signed_in_identity() {
    assert_eq!(
        evaluate_auth_guard(&signed_in("a@x.com"), "/dashboard/userProfile"),
        GuardDecision::Allowed
    );
}

#[test]
fn auth_guard_denies_and_preserves_requested_path() {
    assert_eq!(
        evaluate_auth_guard(&signed_out(), "/dashboard/statistics"),
        GuardDecision::Denied { from: "/dashboard/statistics".to_owned() }
    );
}

// =============================================================
// Role guards
// =============================================================

#[test]
fn role_guard_pending_while_session_restores() {
    let store = SessionStore::default();
    let cache = RoleCache::default();
    let decision =
        evaluate_role_guard(&store, role_view(&cache, &store), Role::Admin, "/dashboard/manageUsers");
    assert_eq!(decision, GuardDecision::Pending);
}

#[test]
fn role_guard_pending_while_role_resolves() {
    let store = signed_in("a@x.com");
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    let decision =
        evaluate_role_guard(&store, role_view(&cache, &store), Role::Admin, "/dashboard/manageUsers");
    assert_eq!(decision, GuardDecision::Pending);
}

#[test]
fn role_guard_allows_matching_role() {
    let store = signed_in("a@x.com");
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", Some(Role::Admin));
    let decision =
        evaluate_role_guard(&store, role_view(&cache, &store), Role::Admin, "/dashboard/manageUsers");
    assert_eq!(decision, GuardDecision::Allowed);
}

#[test]
fn role_guard_denies_wrong_role() {
    let store = signed_in("a@x.com");
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", Some(Role::Moderator));
    let decision =
        evaluate_role_guard(&store, role_view(&cache, &store), Role::Admin, "/dashboard/manageUsers");
    assert_eq!(decision, GuardDecision::Denied { from: "/dashboard/manageUsers".to_owned() });
}

#[test]
fn role_guard_denies_failed_lookup_fail_closed() {
    let store = signed_in("a@x.com");
    let mut cache = RoleCache::default();
    cache.begin("a@x.com");
    cache.complete("a@x.com", None);
    let decision = evaluate_role_guard(
        &store,
        role_view(&cache, &store),
        Role::Moderator,
        "/dashboard/productReviewQueue",
    );
    assert_eq!(
        decision,
        GuardDecision::Denied { from: "/dashboard/productReviewQueue".to_owned() }
    );
}

#[test]
fn role_guard_denies_signed_out_before_issuing_role_query() {
    let store = signed_out();
    let cache = RoleCache::default();
    // `view` for an absent identity is not loading, so the guard denies
    // without the cache ever claiming a fetch.
    let decision =
        evaluate_role_guard(&store, role_view(&cache, &store), Role::Admin, "/dashboard/statistics");
    assert_eq!(decision, GuardDecision::Denied { from: "/dashboard/statistics".to_owned() });
}

// =============================================================
// Denial + sign-in round trip
// =============================================================

#[test]
fn denied_path_survives_until_after_sign_in() {
    let mut store = signed_out();
    let decision = evaluate_auth_guard(&store, "/dashboard/statistics");
    let GuardDecision::Denied { from } = decision else {
        panic!("expected denial");
    };
    store.remember_location(&from);

    store.set_identity(Identity {
        email: "a@x.com".to_owned(),
        name: "Test User".to_owned(),
        photo_url: None,
    });
    assert_eq!(store.take_return_to(), "/dashboard/statistics");
}
