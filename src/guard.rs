//! Route guards for the dashboard subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard re-evaluates a pure decision over session and role state on
//! every dependency change; no internal state is retained. While any
//! dependency is loading the guard renders a neutral placeholder and
//! performs no navigation, so unauthorized content never flashes. A denial
//! remembers the requested path and redirects to the application root.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::hooks::role::use_role;
use crate::net::types::Role;
use crate::state::auth::SessionStore;
use crate::state::role::RoleView;

/// Outcome of one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// A dependency is still loading; render a placeholder, do nothing.
    Pending,
    /// Render the protected subtree.
    Allowed,
    /// Redirect to the root, remembering where the user was headed.
    Denied { from: String },
}

/// Decide access for a route that only requires a signed-in identity.
pub fn evaluate_auth_guard(session: &SessionStore, requested: &str) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.signed_in() {
        return GuardDecision::Allowed;
    }
    GuardDecision::Denied { from: requested.to_owned() }
}

/// Decide access for a route that requires an elevated role. An
/// unresolved or failed role flag denies (fail-closed).
pub fn evaluate_role_guard(
    session: &SessionStore,
    roles: RoleView,
    required: Role,
    requested: &str,
) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }
    if !session.signed_in() {
        return GuardDecision::Denied { from: requested.to_owned() };
    }
    if roles.loading {
        return GuardDecision::Pending;
    }
    if roles.role == Some(required) {
        return GuardDecision::Allowed;
    }
    GuardDecision::Denied { from: requested.to_owned() }
}

/// Neutral blocking placeholder shown while a guard is pending.
#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="guard-placeholder">
            <div class="guard-placeholder__spinner" aria-label="Loading"></div>
        </div>
    }
}

fn install_denial_redirect(decision: Memo<GuardDecision>, session: RwSignal<SessionStore>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Denied { from } = decision.get() {
            // A re-evaluation can fire once more mid-redirect, after the
            // location already moved to the root; don't clobber the
            // remembered path with it.
            if from == "/" {
                return;
            }
            session.update(|s| s.remember_location(&from));
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Gate a subtree on a signed-in identity.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();
    let decision = Memo::new(move |_| {
        evaluate_auth_guard(&session.get(), &location.pathname.get())
    });
    install_denial_redirect(decision, session);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allowed
            fallback=|| view! { <GuardPlaceholder/> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn RequireRole(required: Role, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let roles = use_role();
    let location = use_location();
    let decision = Memo::new(move |_| {
        evaluate_role_guard(&session.get(), roles.get(), required, &location.pathname.get())
    });
    install_denial_redirect(decision, session);

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allowed
            fallback=|| view! { <GuardPlaceholder/> }
        >
            {children()}
        </Show>
    }
}

/// Gate a subtree on the admin role.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole required=Role::Admin>{children()}</RequireRole> }
}

/// Gate a subtree on the moderator role.
#[component]
pub fn RequireModerator(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole required=Role::Moderator>{children()}</RequireRole> }
}
