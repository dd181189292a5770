//! Moderator review queue: accept, reject, or feature submissions.

#[cfg(test)]
#[path = "review_queue_test.rs"]
mod review_queue_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Product, ProductStatus};
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

/// Pending submissions first, everything else after, original order kept
/// within each group.
fn order_for_review(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by_key(|p| p.status != ProductStatus::Pending);
    products
}

#[component]
pub fn ProductReviewQueuePage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_all_products().await {
                    Ok(items) => products.set(order_for_review(items)),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_store, roles, notify);
        }
    });

    let set_status = move |id: String, status: ProductStatus| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::set_product_status(&id, status).await {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Product status updated.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    };

    let make_featured = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::set_product_featured(&id).await {
                    Ok(_) => {
                        notify.update(|n| {
                            n.success("Product marked as featured.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="review-queue-page">
            <h1>"Product Review Queue"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading queue..."</p> }>
                <table class="dashboard-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let accept_id = product.id.clone();
                                    let reject_id = product.id.clone();
                                    let feature_id = product.id.clone();
                                    let details_href = format!("/product/{}", product.id);
                                    let pending = product.status == ProductStatus::Pending;
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=details_href>{product.product_name}</a>
                                            </td>
                                            <td>{format!("{:?}", product.status)}</td>
                                            <td class="dashboard-table__actions">
                                                <button
                                                    class="btn"
                                                    disabled=!pending
                                                    on:click=move |_| set_status(
                                                        accept_id.clone(),
                                                        ProductStatus::Accepted,
                                                    )
                                                >
                                                    "Accept"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=!pending
                                                    on:click=move |_| set_status(
                                                        reject_id.clone(),
                                                        ProductStatus::Rejected,
                                                    )
                                                >
                                                    "Reject"
                                                </button>
                                                <button
                                                    class="btn"
                                                    disabled=product.featured
                                                    on:click=move |_| make_featured(feature_id.clone())
                                                >
                                                    "Make Featured"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
