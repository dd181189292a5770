//! Registration page with client-side validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::hooks::session;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;
use crate::util::validate;

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    name: String,
    email: String,
    photo_url: String,
    password: String,
}

fn validate_registration(
    name: &str,
    email: &str,
    photo_url: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let name = validate::require_trimmed(name, "Enter your full name.")?;
    if !validate::is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    let photo_url = validate::require_trimmed(photo_url, "Enter your photo URL.")?;
    validate::validate_password(password)?;
    Ok(RegistrationInput {
        name,
        email: email.trim().to_owned(),
        photo_url,
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration(
            &name.get(),
            &email.get(),
            &photo_url.get(),
            &password.get(),
        ) {
            Ok(input) => input,
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
                match session::sign_up(
                    session_store,
                    roles,
                    &input.name,
                    &input.email,
                    &input.photo_url,
                    &input.password,
                )
                .await
                {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Signup successful.");
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
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
            let _ = (input, session_store, roles, notify, &navigate);
        }
    };

    let on_provider = move |_| {
        session::sign_in_with_provider();
    };

    view! {
        <Title text="TechHive | Register"/>
        <div class="register-page">
            <div class="login-card">
                <h2 class="login-card__welcome">"Register"</h2>
                <h1 class="login-card__title">"Start for free today"</h1>
                <p class="login-card__subtitle">
                    "Access to all features. No credit card required."
                </p>

                <button class="btn login-card__provider" type="button" on:click=on_provider>
                    "Sign in with Google"
                </button>

                <div class="login-card__divider">"Or continue with"</div>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Full Name *"
                        <input
                            class="login-form__input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Email *"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Photo URL *"
                        <input
                            class="login-form__input"
                            type="text"
                            placeholder="Enter your photo URL"
                            prop:value=move || photo_url.get()
                            on:input=move |ev| photo_url.set(event_target_value(&ev))
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
                        "Register"
                    </button>
                </form>

                <p class="login-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
