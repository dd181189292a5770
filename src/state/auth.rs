//! Session store: the current identity and its lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-dependent components read this store; only the
//! session operations in `hooks::session` write to it. `loading` is true
//! during initial session restoration at application start and never
//! re-entered by later operations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;

/// Authentication state tracking the current identity and restore status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStore {
    /// The signed-in user, or `None` when signed out.
    pub identity: Option<Identity>,
    /// True only while the persisted session is being restored.
    pub loading: bool,
    /// Path a guard denied before sign-in; consumed after the next
    /// successful sign-in to return the user where they were headed.
    pub return_to: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        // Restoration starts immediately at app start, so the store is
        // born loading; `finish_restore` ends that phase exactly once.
        Self { identity: None, loading: true, return_to: None }
    }
}

impl SessionStore {
    pub fn signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Email of the current identity, if present.
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.email.as_str())
    }

    /// End the initial restoration phase with whatever it found.
    pub fn finish_restore(&mut self, identity: Option<Identity>) {
        self.identity = identity;
        self.loading = false;
    }

    /// Install the identity after a successful sign-in or sign-up.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Tear the session down on sign-out.
    pub fn clear(&mut self) {
        self.identity = None;
        self.return_to = None;
    }

    /// Record the path a guard turned away, for post-login redirect.
    pub fn remember_location(&mut self, path: &str) {
        self.return_to = Some(path.to_owned());
    }

    /// Consume the remembered path, defaulting to the application root.
    pub fn take_return_to(&mut self) -> String {
        self.return_to.take().unwrap_or_else(|| "/".to_owned())
    }
}
