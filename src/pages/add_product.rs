//! Product submission form.

#[cfg(test)]
#[path = "add_product_test.rs"]
mod add_product_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{ProductStatus, ProductSubmission};
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;
use crate::util::validate;

/// Validated form values, before owner fields are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProductInput {
    pub name: String,
    pub image: String,
    pub description: String,
    pub external_link: Option<String>,
    pub tags: Vec<String>,
}

pub(crate) fn validate_product_input(
    name: &str,
    image: &str,
    description: &str,
    external_link: &str,
    tags_input: &str,
) -> Result<ProductInput, &'static str> {
    let name = validate::require_trimmed(name, "Enter a product name.")?;
    let image = validate::require_trimmed(image, "Enter a product image URL.")?;
    let description = validate::require_trimmed(description, "Enter a description.")?;
    let tags = validate::parse_tags(tags_input);
    if tags.is_empty() {
        return Err("Add at least one tag.");
    }
    let external_link = {
        let trimmed = external_link.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
    };
    Ok(ProductInput { name, image, description, external_link, tags })
}

fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let name = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let external_link = RwSignal::new(String::new());
    let tags_input = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(identity) = session_store.with_untracked(|s| s.identity.clone()) else {
            return;
        };
        let input = match validate_product_input(
            &name.get(),
            &image.get(),
            &description.get(),
            &external_link.get(),
            &tags_input.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                field_error.set(message.to_owned());
                return;
            }
        };
        field_error.set(String::new());
        busy.set(true);

        let submission = ProductSubmission {
            product_name: input.name,
            product_image: input.image,
            description: input.description,
            external_link: input.external_link,
            tags: input.tags,
            owner_name: identity.name,
            owner_email: identity.email,
            owner_image: identity.photo_url,
            status: ProductStatus::Pending,
            upvote: 0,
            created_at: now_iso(),
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::submit_product(&submission).await {
                    Ok(outcome) if outcome.created() => {
                        notify.update(|n| {
                            n.success("Product submitted for review.");
                        });
                        name.set(String::new());
                        image.set(String::new());
                        description.set(String::new());
                        external_link.set(String::new());
                        tags_input.set(String::new());
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Product not added. Please try again.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, roles, notify);
        }
    };

    view! {
        <div class="add-product-page">
            <h1>"Add Product"</h1>
            <form class="product-form" on:submit=on_submit>
                <label class="product-form__label">
                    "Product Name *"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="product-form__label">
                    "Product Image URL *"
                    <input
                        type="text"
                        prop:value=move || image.get()
                        on:input=move |ev| image.set(event_target_value(&ev))
                    />
                </label>
                <label class="product-form__label">
                    "Description *"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="product-form__label">
                    "External Link"
                    <input
                        type="text"
                        placeholder="https://..."
                        prop:value=move || external_link.get()
                        on:input=move |ev| external_link.set(event_target_value(&ev))
                    />
                </label>
                <label class="product-form__label">
                    "Tags (comma separated) *"
                    <input
                        type="text"
                        placeholder="ai, productivity, web"
                        prop:value=move || tags_input.get()
                        on:input=move |ev| tags_input.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !field_error.get().is_empty()>
                    <p class="login-form__error">{move || field_error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit Product"
                </button>
            </form>
        </div>
    }
}
