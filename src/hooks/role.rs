//! Role resolver hook: one cached role query per identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and the dashboard menu read the resolved role through this
//! hook. The cache claims the fetch before any request is spawned, so
//! however many guards mount at once, each identity is queried exactly
//! once. No request is ever issued for an absent identity.

use leptos::prelude::*;

use crate::state::auth::SessionStore;
use crate::state::role::{RoleCache, RoleView};

/// Resolve the current identity's role, issuing the backend query on
/// first use. Returns a reactive `(role, loading)` view; a failed lookup
/// reads as `role: None`, which gates fail-closed.
pub fn use_role() -> Memo<RoleView> {
    let session = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();

    Effect::new(move || {
        let Some(email) = session.with(|s| s.email().map(str::to_owned)) else {
            return;
        };
        let claimed = roles.try_update(|c| c.begin(&email)).unwrap_or(false);
        if !claimed {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let role = match crate::net::api::fetch_role(&email).await {
                    Ok(role) => Some(role),
                    Err(err) => {
                        leptos::logging::warn!("role lookup failed: {err}");
                        None
                    }
                };
                roles.update(|c| c.complete(&email, role));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
        }
    });

    Memo::new(move |_| {
        let email = session.with(|s| s.email().map(str::to_owned));
        roles.with(|c| c.view(email.as_deref()))
    })
}
