//! Role cache: one backend query per distinct identity, fail-closed.
//!
//! DESIGN
//! ======
//! Keyed by identity email. `begin` claims the fetch so concurrent renders
//! never double-query; `complete` records the result or a fail-closed
//! `Failed` entry. The whole cache is dropped whenever the identity
//! changes, which is the only invalidation path.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::collections::HashMap;

use crate::net::types::Role;

/// Lifecycle of one identity's role lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleEntry {
    /// A fetch has been claimed but not completed.
    Pending,
    Resolved(Role),
    /// The query failed; treated as not-authorized for gating.
    Failed,
}

/// A gating view of the cache for one identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleView {
    /// Resolved role; `None` means unresolved or failed (not authorized).
    pub role: Option<Role>,
    pub loading: bool,
}

/// Process-wide cache of resolved roles, injected via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleCache {
    entries: HashMap<String, RoleEntry>,
}

impl RoleCache {
    /// Claim the fetch for `email`. Returns `true` exactly once per
    /// distinct email between invalidations; subsequent renders reuse the
    /// cached entry.
    pub fn begin(&mut self, email: &str) -> bool {
        if self.entries.contains_key(email) {
            return false;
        }
        self.entries.insert(email.to_owned(), RoleEntry::Pending);
        true
    }

    /// Record the outcome of a claimed fetch. Completions for identities
    /// invalidated mid-flight are dropped.
    pub fn complete(&mut self, email: &str, role: Option<Role>) {
        if let Some(entry) = self.entries.get_mut(email) {
            *entry = match role {
                Some(role) => RoleEntry::Resolved(role),
                None => RoleEntry::Failed,
            };
        }
    }

    /// Gating view for the current identity. An absent identity issues no
    /// query and is never loading; a present identity without a completed
    /// entry is loading until `complete` lands.
    pub fn view(&self, email: Option<&str>) -> RoleView {
        let Some(email) = email else {
            return RoleView { role: None, loading: false };
        };
        match self.entries.get(email) {
            None | Some(RoleEntry::Pending) => RoleView { role: None, loading: true },
            Some(RoleEntry::Resolved(role)) => RoleView { role: Some(*role), loading: false },
            Some(RoleEntry::Failed) => RoleView { role: None, loading: false },
        }
    }

    /// Drop every entry; called when the identity changes.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}
