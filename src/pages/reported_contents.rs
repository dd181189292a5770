//! Moderator view of reported products.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Product;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

#[component]
pub fn ReportedContentsPage() -> impl IntoView {
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
                match api::fetch_reported_products().await {
                    Ok(items) => products.set(items),
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

    let on_delete = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::delete_reported_product(&id).await {
                    Ok(outcome) if outcome.deleted() => {
                        notify.update(|n| {
                            n.success("Reported product removed.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Product was not removed.");
                    }),
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
        <div class="reported-contents-page">
            <h1>"Reported Contents"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading reports..."</p> }>
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| view! { <p>"No reported products. All clear."</p> }
                >
                    <table class="dashboard-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Owner"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                products
                                    .get()
                                    .into_iter()
                                    .map(|product| {
                                        let details_href = format!("/product/{}", product.id);
                                        let delete_id = product.id.clone();
                                        view! {
                                            <tr>
                                                <td>{product.product_name}</td>
                                                <td>{product.owner_email}</td>
                                                <td class="dashboard-table__actions">
                                                    <a class="btn" href=details_href>
                                                        "View Details"
                                                    </a>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete(delete_id.clone())
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
