//! Edit form for an owned product.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::ProductPatch;
use crate::pages::add_product::validate_product_input;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

#[component]
pub fn UpdateProductPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let params = leptos_router::hooks::use_params_map();

    let name = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let external_link = RwSignal::new(String::new());
    let tags_input = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());
    let loaded = RwSignal::new(false);
    let busy = RwSignal::new(false);

    // Prefill the form from the stored product.
    Effect::new(move || {
        let Some(id) = params.read().get("id") else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_product(&id).await {
                    Ok(product) => {
                        name.set(product.product_name);
                        image.set(product.product_image);
                        description.set(product.description);
                        external_link.set(product.external_link.unwrap_or_default());
                        tags_input.set(product.tags.join(", "));
                        loaded.set(true);
                    }
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, session_store, roles, notify);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(id) = params.read_untracked().get("id") else {
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

        let patch = ProductPatch {
            product_name: input.name,
            product_image: input.image,
            description: input.description,
            external_link: input.external_link,
            tags: input.tags,
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::update_product(&id, &patch).await {
                    Ok(_) => notify.update(|n| {
                        n.success("Product updated.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, patch);
        }
    };

    view! {
        <div class="update-product-page">
            <h1>"Update Product"</h1>
            <Show when=move || loaded.get() fallback=|| view! { <p>"Loading product..."</p> }>
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
                            prop:value=move || external_link.get()
                            on:input=move |ev| external_link.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="product-form__label">
                        "Tags (comma separated) *"
                        <input
                            type="text"
                            prop:value=move || tags_input.get()
                            on:input=move |ev| tags_input.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !field_error.get().is_empty()>
                        <p class="login-form__error">{move || field_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save Changes"
                    </button>
                </form>
            </Show>
        </div>
    }
}
