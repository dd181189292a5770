//! Product detail page: full info, vote, report, and reviews.

#[cfg(test)]
#[path = "product_details_test.rs"]
mod product_details_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Product, Review};
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

/// Check a review before posting; returns the trimmed description.
fn validate_review(rating: u8, description: &str) -> Result<String, &'static str> {
    if !(1..=5).contains(&rating) {
        return Err("Select a rating between 1 and 5 stars.");
    }
    let description = description.trim();
    if description.is_empty() {
        return Err("Write a few words about the product.");
    }
    Ok(description.to_owned())
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let params = leptos_router::hooks::use_params_map();

    let product = RwSignal::new(None::<Product>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let rating = RwSignal::new(5u8);
    let description = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);

    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_product(&id).await {
                    Ok(fetched) => product.set(Some(fetched)),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
                match api::fetch_reviews(&id).await {
                    Ok(fetched) => reviews.set(fetched),
                    Err(err) => {
                        leptos::logging::warn!("review fetch failed: {err}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, roles, notify);
        }
    });

    let viewer_email = move || session_store.with(|s| s.email().map(str::to_owned));

    let on_upvote = move |_| {
        let Some(email) = viewer_email() else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return;
        };
        let Some(id) = product.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::upvote_product(&id, &email).await {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Upvoted successfully!");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, email);
        }
    };

    let on_report = move |_| {
        let Some(email) = viewer_email() else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return;
        };
        let Some(id) = product.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::report_product(&id, &email).await {
                    Ok(_) => notify.update(|n| {
                        n.success("Product reported. A moderator will take a look.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, email);
        }
    };

    let on_post_review = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(identity) = session_store.with_untracked(|s| s.identity.clone()) else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return;
        };
        let Some(id) = product.with_untracked(|p| p.as_ref().map(|p| p.id.clone())) else {
            return;
        };
        let text = match validate_review(rating.get(), &description.get()) {
            Ok(text) => text,
            Err(message) => {
                field_error.set(message.to_owned());
                return;
            }
        };
        field_error.set(String::new());
        let review = Review {
            product_id: id,
            reviewer_name: identity.name,
            reviewer_image: identity.photo_url,
            review_description: text,
            rating: rating.get(),
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::post_review(&review).await {
                    Ok(ack) if ack.success => {
                        notify.update(|n| {
                            n.success("Review posted.");
                        });
                        reviews.update(|r| r.push(review));
                        description.set(String::new());
                        rating.set(5);
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Review was not saved. Please try again.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = review;
        }
    };

    view! {
        <div class="product-details">
            <Show
                when=move || product.get().is_some()
                fallback=|| {
                    view! {
                        <div class="guard-placeholder">
                            <div class="guard-placeholder__spinner" aria-label="Loading"></div>
                        </div>
                    }
                }
            >
                {move || {
                    product
                        .get()
                        .map(|p| {
                            let vote_disabled = viewer_email()
                                .as_deref()
                                .is_some_and(|email| p.vote_disabled_for(email));
                            view! {
                                <div class="product-details__card">
                                    <img
                                        class="product-details__image"
                                        src=p.product_image.clone()
                                        alt=p.product_name.clone()
                                    />
                                    <div class="product-details__info">
                                        <h1>{p.product_name.clone()}</h1>
                                        <p class="product-details__owner">
                                            "Submitted by " {p.owner_name.clone()}
                                        </p>
                                        <p class="product-details__description">
                                            {p.description.clone()}
                                        </p>
                                        <div class="product-details__tags">
                                            {p
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="product-card__tag">"#" {tag.clone()}</span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        {p
                                            .external_link
                                            .clone()
                                            .map(|link| {
                                                view! {
                                                    <a class="product-details__link" href=link target="_blank">
                                                        "Visit Site"
                                                    </a>
                                                }
                                            })}
                                        <div class="product-details__actions">
                                            <button
                                                class="btn btn--primary"
                                                disabled=vote_disabled
                                                on:click=on_upvote
                                            >
                                                "▲ " {p.upvote}
                                            </button>
                                            <button class="btn btn--danger" on:click=on_report>
                                                "Report"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>

            <section class="product-details__reviews">
                <h2>"Customer Reviews (" {move || reviews.get().len()} ")"</h2>
                <div class="review-list">
                    {move || {
                        reviews
                            .get()
                            .into_iter()
                            .map(|review| {
                                view! {
                                    <div class="review-card">
                                        <span class="review-card__name">{review.reviewer_name}</span>
                                        <span class="review-card__rating">
                                            {"★".repeat(usize::from(review.rating))}
                                        </span>
                                        <p class="review-card__text">{review.review_description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <form class="review-form" on:submit=on_post_review>
                    <label class="review-form__label">
                        "Rating"
                        <select on:change=move |ev| {
                            rating.set(event_target_value(&ev).parse().unwrap_or(5));
                        }>
                            {(1u8..=5)
                                .map(|value| {
                                    view! {
                                        <option value=value selected=move || rating.get() == value>
                                            {value}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <textarea
                        class="review-form__text"
                        placeholder="Share your experience..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || !field_error.get().is_empty()>
                        <p class="login-form__error">{move || field_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        "Post Review"
                    </button>
                </form>
            </section>
        </div>
    }
}
