//! User profile page with membership subscription.
//!
//! DESIGN
//! ======
//! The card-entry widget is out of scope; the flow here creates the payment
//! intent, lets the user apply a coupon, and records the subscription
//! against the intent id the backend issued.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

const MEMBERSHIP_PRICE: f64 = 9.99;

/// Payment intent ids arrive embedded in the client secret
/// (`pi_123_secret_456`); the id is everything before `_secret`.
fn intent_id_from_client_secret(client_secret: &str) -> Option<&str> {
    client_secret.split_once("_secret").map(|(id, _)| id).filter(|id| !id.is_empty())
}

/// Membership price after a percentage discount, never below zero.
fn discounted_price(base: f64, discount_pct: f64) -> f64 {
    (base * (1.0 - discount_pct / 100.0)).max(0.0)
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let subscribed = RwSignal::new(false);
    let coupon_code = RwSignal::new(String::new());
    let discount = RwSignal::new(0.0f64);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let Some(email) = session_store.with(|s| s.email().map(str::to_owned)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_user(&email).await {
                    Ok(record) => subscribed.set(record.is_subscribed),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, roles, notify);
        }
    });

    let on_apply_coupon = move |_| {
        let code = coupon_code.get().trim().to_owned();
        if code.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::apply_coupon(&code).await {
                    Ok(application) if application.discount > 0.0 => {
                        discount.set(application.discount);
                        notify.update(|n| {
                            n.success(format!("Coupon applied: {:.0}% off.", application.discount));
                        });
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("That coupon is invalid or expired.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = code;
        }
    };

    let on_subscribe = move |_| {
        if busy.get() {
            return;
        }
        let Some(email) = session_store.with_untracked(|s| s.email().map(str::to_owned)) else {
            return;
        };
        busy.set(true);
        let amount = discounted_price(MEMBERSHIP_PRICE, discount.get());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = async {
                    let intent = api::create_payment_intent(amount).await?;
                    let transaction_id = intent_id_from_client_secret(&intent.client_secret)
                        .unwrap_or(&intent.client_secret)
                        .to_owned();
                    api::subscribe(&email, &transaction_id).await
                }
                .await;
                match result {
                    Ok(outcome) if outcome.modified() => {
                        subscribed.set(true);
                        notify.update(|n| {
                            n.success("Your subscription is active!");
                        });
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Subscription was not recorded. Please try again.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, amount);
        }
    };

    let identity_name =
        move || session_store.get().identity.map(|i| i.name).unwrap_or_default();
    let identity_email =
        move || session_store.get().identity.map(|i| i.email).unwrap_or_default();
    let avatar = move || {
        session_store
            .get()
            .identity
            .and_then(|i| i.photo_url)
            .unwrap_or_else(|| "/img/avatar-placeholder.svg".to_owned())
    };
    let price_label = move || format!("${:.2}", discounted_price(MEMBERSHIP_PRICE, discount.get()));

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <img class="profile-card__avatar" src=avatar alt="Avatar"/>
                <h1 class="profile-card__name">{identity_name}</h1>
                <p class="profile-card__email">{identity_email}</p>

                <Show
                    when=move || subscribed.get()
                    fallback=move || {
                        view! {
                            <div class="profile-card__membership">
                                <p>"Become a member to unlock unlimited submissions."</p>
                                <div class="profile-card__coupon">
                                    <input
                                        type="text"
                                        placeholder="Coupon code"
                                        prop:value=move || coupon_code.get()
                                        on:input=move |ev| coupon_code.set(event_target_value(&ev))
                                    />
                                    <button class="btn" on:click=on_apply_coupon>
                                        "Apply"
                                    </button>
                                </div>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get()
                                    on:click=on_subscribe
                                >
                                    "Subscribe " {price_label}
                                </button>
                            </div>
                        }
                    }
                >
                    <span class="profile-card__badge">"Verified Member"</span>
                </Show>
            </div>
        </div>
    }
}
