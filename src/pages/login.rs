//! Login page: email + password sign-in and the federated provider flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guard that turned the user away leaves the requested path in the
//! session store; a successful sign-in here returns them to it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::hooks::session;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;
use crate::util::validate;

/// Check the sign-in form; returns trimmed `(email, password)`.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if !validate::is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.trim().to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    field_error.set(message.to_owned());
                    return;
                }
            };
        field_error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session::sign_in(session_store, roles, &email_value, &password_value).await {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Signed in successfully.");
                        });
                        let target = session_store
                            .try_update(SessionStore::take_return_to)
                            .unwrap_or_else(|| "/".to_owned());
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        // Identity stays signed out; no redirect happens.
                        notify.update(|n| {
                            n.error(err.to_string());
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session_store, roles, notify, &navigate);
        }
    };

    let on_provider = move |_| {
        session::sign_in_with_provider();
    };

    view! {
        <Title text="TechHive | Login"/>
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__welcome">"Welcome back!"</h2>
                <h1 class="login-card__title">"Member Login"</h1>
                <p class="login-card__subtitle">
                    "Access to all features. No credit card required."
                </p>

                <button class="btn login-card__provider" type="button" on:click=on_provider>
                    "Sign in with Google"
                </button>

                <div class="login-card__divider">"Or continue with"</div>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email address *"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password *"
                        <input
                            class="login-form__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !field_error.get().is_empty()>
                        <p class="login-form__error">{move || field_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>

                <p class="login-card__footer">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
