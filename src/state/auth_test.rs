use super::*;

fn identity(email: &str) -> Identity {
    Identity { email: email.to_owned(), name: "Test User".to_owned(), photo_url: None }
}

#[test]
fn store_is_born_loading_and_signed_out() {
    let store = SessionStore::default();
    assert!(store.loading);
    assert!(!store.signed_in());
    assert_eq!(store.email(), None);
}

#[test]
fn finish_restore_ends_loading_with_identity() {
    let mut store = SessionStore::default();
    store.finish_restore(Some(identity("a@x.com")));
    assert!(!store.loading);
    assert!(store.signed_in());
    assert_eq!(store.email(), Some("a@x.com"));
}

#[test]
fn finish_restore_ends_loading_without_identity() {
    let mut store = SessionStore::default();
    store.finish_restore(None);
    assert!(!store.loading);
    assert!(!store.signed_in());
}

#[test]
fn set_identity_does_not_reenter_loading() {
    let mut store = SessionStore::default();
    store.finish_restore(None);
    store.set_identity(identity("a@x.com"));
    assert!(!store.loading);
    assert!(store.signed_in());
}

#[test]
fn clear_resets_identity_and_remembered_location() {
    let mut store = SessionStore::default();
    store.finish_restore(Some(identity("a@x.com")));
    store.remember_location("/dashboard/statistics");
    store.clear();
    assert!(!store.signed_in());
    assert_eq!(store.take_return_to(), "/");
}

#[test]
fn take_return_to_consumes_remembered_path() {
    let mut store = SessionStore::default();
    store.remember_location("/dashboard/statistics");
    assert_eq!(store.take_return_to(), "/dashboard/statistics");
    assert_eq!(store.take_return_to(), "/");
}
