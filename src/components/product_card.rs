//! Product card with vote affordance.
//!
//! DESIGN
//! ======
//! The vote button disables for the owner and for voters the client
//! already knows about, but the backend stays the source of truth; a
//! rejected duplicate surfaces as a notice, never a crash.

use leptos::prelude::*;

use crate::net::types::Product;

/// A clickable card representing a product in a listing grid.
#[component]
pub fn ProductCard(
    product: Product,
    /// Email of the current identity, when signed in.
    #[prop(optional_no_strip)]
    viewer_email: Option<String>,
    on_upvote: Callback<String>,
) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let vote_disabled = viewer_email
        .as_deref()
        .is_some_and(|email| product.vote_disabled_for(email));
    let id = product.id.clone();
    let tags = product.tags.clone();

    view! {
        <div class="product-card">
            <a class="product-card__image-link" href=href.clone()>
                <img class="product-card__image" src=product.product_image alt=product.product_name.clone()/>
            </a>
            <div class="product-card__body">
                <a class="product-card__name" href=href>
                    {product.product_name}
                </a>
                <div class="product-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="product-card__tag">"#" {tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="btn product-card__vote"
                    disabled=vote_disabled
                    on:click=move |_| on_upvote.run(id.clone())
                >
                    "▲ " {product.upvote}
                </button>
            </div>
        </div>
    }
}
