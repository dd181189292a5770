//! Session operations: restore, sign-in, sign-up, federated flow, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of `SessionStore`. Each operation returns a
//! value or an `AuthError`; pushing a notice is left to the caller. The
//! role cache is invalidated on every identity change so stale flags never
//! survive a different sign-in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::{AuthError, RequestError};
use crate::net::types::Identity;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;
use crate::util::persistence;

/// The session store provided at app start.
pub fn use_session() -> RwSignal<SessionStore> {
    expect_context::<RwSignal<SessionStore>>()
}

/// Result of parsing the federated provider's callback fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Not a callback; restore from stored state.
    None,
    /// Provider handed back a session token.
    Token(String),
    /// The user abandoned the provider flow.
    Cancelled,
}

/// Parse a `#token=…` / `#error=…` location fragment left by the federated
/// provider redirect.
pub fn parse_callback_fragment(fragment: &str) -> CallbackOutcome {
    let fragment = fragment.trim_start_matches('#');
    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "token" if !value.is_empty() => return CallbackOutcome::Token(value.to_owned()),
            "error" => return CallbackOutcome::Cancelled,
            _ => {}
        }
    }
    CallbackOutcome::None
}

/// Kick off the one-time session restoration at application start.
///
/// The store is born with `loading = true`; this ends that phase exactly
/// once, whether or not a persisted session was found.
pub fn install_session_restore(
    session: RwSignal<SessionStore>,
    roles: RwSignal<RoleCache>,
    notify: RwSignal<NotifyState>,
) {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let restored = restore(notify).await;
                roles.update(|c| c.invalidate_all());
                session.update(|s| s.finish_restore(restored));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, roles, notify);
        }
    });
}

#[cfg(feature = "hydrate")]
fn clear_fragment() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash("");
    }
}

#[cfg(feature = "hydrate")]
async fn restore(notify: RwSignal<NotifyState>) -> Option<Identity> {
    // A federated callback fragment outranks whatever token was stored.
    let fragment = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
    let mut from_callback = false;
    match parse_callback_fragment(&fragment) {
        CallbackOutcome::Token(token) => {
            persistence::store_session_token(&token);
            from_callback = true;
            clear_fragment();
        }
        CallbackOutcome::Cancelled => {
            notify.update(|n| {
                n.error(AuthError::ProviderCancelled.to_string());
            });
            clear_fragment();
        }
        CallbackOutcome::None => {}
    }

    persistence::session_token()?;

    match api::fetch_session().await {
        Ok(identity) => {
            if from_callback {
                // Idempotent upsert after a federated sign-in; an existing
                // record is success.
                if let Err(err) = api::upsert_user(&identity.name, &identity.email).await {
                    leptos::logging::warn!("user upsert failed: {err}");
                }
            }
            Some(identity)
        }
        Err(RequestError::Unauthorized) => {
            persistence::clear_session_token();
            None
        }
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            None
        }
    }
}

/// Sign in with email and password.
pub async fn sign_in(
    session: RwSignal<SessionStore>,
    roles: RwSignal<RoleCache>,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let payload = api::sign_in(email, password).await?;
    persistence::store_session_token(&payload.token);
    if let Err(err) = api::upsert_user(&payload.user.name, &payload.user.email).await {
        leptos::logging::warn!("user upsert failed: {err}");
    }
    roles.update(|c| c.invalidate_all());
    session.update(|s| s.set_identity(payload.user.clone()));
    Ok(payload.user)
}

/// Register a new account and open its first session.
pub async fn sign_up(
    session: RwSignal<SessionStore>,
    roles: RwSignal<RoleCache>,
    name: &str,
    email: &str,
    photo_url: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let payload = api::sign_up(name, email, photo_url, password).await?;
    persistence::store_session_token(&payload.token);
    roles.update(|c| c.invalidate_all());
    session.update(|s| s.set_identity(payload.user.clone()));
    Ok(payload.user)
}

/// Start the federated sign-in flow by redirecting to the provider
/// gateway; the callback lands back at the root with a token fragment.
pub fn sign_in_with_provider() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&api::federated_sign_in_url());
        }
    }
}

/// Tear the session down: clear the stored token, drop cached roles,
/// reset identity to signed-out.
pub fn sign_out(session: RwSignal<SessionStore>, roles: RwSignal<RoleCache>) {
    persistence::clear_session_token();
    roles.update(|c| c.invalidate_all());
    session.update(SessionStore::clear);
}

/// Standard reaction to a failed secure request: an expired credential
/// tears the session down and returns the user to `/login`; anything else
/// surfaces as a notice and stays retryable.
pub fn handle_request_error(
    err: &RequestError,
    session: RwSignal<SessionStore>,
    roles: RwSignal<RoleCache>,
    notify: RwSignal<NotifyState>,
) {
    if matches!(err, RequestError::Unauthorized) {
        sign_out(session, roles);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        return;
    }
    notify.update(|n| {
        n.error(err.user_message());
    });
}
