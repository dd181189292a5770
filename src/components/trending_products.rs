//! Trending products section: the most-voted products right now.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::hooks::upvote::{use_upvote, vote_callback};
use crate::state::auth::SessionStore;

#[component]
pub fn TrendingProducts() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let handle = use_upvote();
    let on_upvote = vote_callback(handle);
    let cache = handle.cache;

    let viewer_email = move || session.with(|s| s.email().map(str::to_owned));

    view! {
        <section class="product-section product-section--trending">
            <h2 class="product-section__title">"Trending Products"</h2>
            <Show when=move || cache.with(|c| c.trending.error.is_some())>
                <p class="product-section__error">
                    {move || cache.with(|c| c.trending.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || !cache.with(|c| c.trending.loading)
                fallback=|| view! { <p class="product-section__loading">"Loading products..."</p> }
            >
                <div class="product-section__grid">
                    {move || {
                        let email = viewer_email();
                        cache
                            .get()
                            .trending
                            .items
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        viewer_email=email.clone()
                                        on_upvote=on_upvote
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
