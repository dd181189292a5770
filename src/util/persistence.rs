//! Browser localStorage helpers for durable client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so the session store and
//! theme toggle can persist state without repeating web-sys glue. The
//! session token lives here because the secure HTTP client and the session
//! restore path both need it.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the bearer token of the active session.
pub const SESSION_TOKEN_KEY: &str = "techhive_session_token";

/// Load a string value from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a string value to `localStorage` for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a value from `localStorage` for `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_string(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_string(key, &raw);
}

/// Read the persisted session token, if any.
pub fn session_token() -> Option<String> {
    load_string(SESSION_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persist the session token for the secure client to attach.
pub fn store_session_token(token: &str) {
    save_string(SESSION_TOKEN_KEY, token);
}

/// Clear the persisted session token on sign-out.
pub fn clear_session_token() {
    remove(SESSION_TOKEN_KEY);
}
