//! The signed-in user's own submissions.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Product, ProductStatus};
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

fn status_label(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Pending => "Pending",
        ProductStatus::Accepted => "Accepted",
        ProductStatus::Rejected => "Rejected",
    }
}

#[component]
pub fn MyProductsPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move || {
        let Some(email) = session_store.with(|s| s.email().map(str::to_owned)) else {
            return;
        };
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_my_products(&email).await {
                    Ok(items) => products.set(items),
                    Err(err) => notify.update(|n| {
                        n.error(err.user_message());
                    }),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, roles, notify);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::delete_product(&id).await {
                    Ok(outcome) if outcome.deleted() => {
                        notify.update(|n| {
                            n.success("Product deleted.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Product was not deleted.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="my-products-page">
            <h1>"My Products"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading your products..."</p> }
            >
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| view! { <p>"You have not submitted any products yet."</p> }
                >
                    <table class="dashboard-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Votes"</th>
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
                                        let update_href =
                                            format!("/dashboard/updateProduct/{}", product.id);
                                        let id = product.id.clone();
                                        view! {
                                            <tr>
                                                <td>{product.product_name}</td>
                                                <td>{product.upvote}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        status_label(product.status).to_lowercase(),
                                                    )>{status_label(product.status)}</span>
                                                </td>
                                                <td class="dashboard-table__actions">
                                                    <a class="btn" href=update_href>
                                                        "Update"
                                                    </a>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(id.clone())
                                                    >
                                                        "Delete"
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
            </Show>
        </div>
    }
}
