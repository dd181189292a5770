#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_string_is_none_without_browser() {
    assert_eq!(load_string(SESSION_TOKEN_KEY), None);
}

#[test]
fn session_token_is_none_without_browser() {
    assert_eq!(session_token(), None);
}

#[test]
fn save_and_remove_are_noops_but_callable() {
    save_string("k", "v");
    remove("k");
    store_session_token("tok");
    clear_session_token();
}

#[test]
fn load_json_is_none_without_browser() {
    let value: Option<Vec<String>> = load_json("k");
    assert_eq!(value, None);
}
