//! Public product listing with tag search, pagination, and voting.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::product_card::ProductCard;
#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::products::CollectionState;
use crate::state::role::RoleCache;

const PRODUCTS_PER_PAGE: u32 = 6;

fn prev_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

fn next_page(current: u32) -> u32 {
    current + 1
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);
    let listing = RwSignal::new(CollectionState::default());
    let reload = RwSignal::new(0u32);

    // Refetch on every search, page, or reload change. The epoch token
    // claimed here discards a slow response that a newer query superseded.
    Effect::new(move || {
        let search_value = search.get();
        let page_value = page.get();
        reload.track();
        let Some(token) = listing.try_update(CollectionState::begin_fetch) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = api::fetch_accepted_products(&search_value, page_value, PRODUCTS_PER_PAGE)
                    .await
                    .map(|p| p.products)
                    .map_err(|e| e.user_message());
                listing.update(|l| {
                    l.apply(token, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (search_value, page_value, token, roles, notify);
        }
    });

    let on_upvote = Callback::new(move |product_id: String| {
        let Some(email) = session_store.with_untracked(|s| s.email().map(str::to_owned)) else {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::upvote_product(&product_id, &email).await {
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
            let _ = (product_id, email);
        }
    });

    let viewer_email = move || session_store.with(|s| s.email().map(str::to_owned));

    view! {
        <Title text="TechHive | Products"/>
        <div class="products-page">
            <div class="products-page__header">
                <h1>"Discover Amazing Products"</h1>
                <p>"Explore our curated collection and vote for your favorites."</p>
            </div>

            <div class="products-page__search">
                <input
                    type="text"
                    placeholder="Search by tag..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
            </div>

            <Show when=move || listing.with(|l| l.error.is_some())>
                <p class="products-page__error">
                    {move || listing.with(|l| l.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <Show
                when=move || !listing.with(|l| l.loading)
                fallback=|| view! { <p class="products-page__loading">"Loading products..."</p> }
            >
                <div class="products-page__grid">
                    {move || {
                        let email = viewer_email();
                        listing
                            .get()
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

            <div class="products-page__pagination">
                <button
                    class="btn"
                    disabled=move || page.get() == 1
                    on:click=move |_| page.update(|p| *p = prev_page(*p))
                >
                    "Previous"
                </button>
                <span class="products-page__page">"Page " {move || page.get()}</span>
                <button class="btn" on:click=move |_| page.update(|p| *p = next_page(*p))>
                    "Next"
                </button>
            </div>
        </div>
    }
}
