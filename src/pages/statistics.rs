//! Admin statistics overview.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Statistics;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let statistics = RwSignal::new(Statistics::default());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_statistics().await {
                    Ok(stats) => statistics.set(stats),
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

    view! {
        <div class="statistics-page">
            <h1>"Site Statistics"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading statistics..."</p> }>
                <div class="statistics-page__tiles">
                    <div class="stat-tile">
                        <span class="stat-tile__value">
                            {move || statistics.get().accepted_products}
                        </span>
                        <span class="stat-tile__label">"Accepted Products"</span>
                    </div>
                    <div class="stat-tile">
                        <span class="stat-tile__value">
                            {move || statistics.get().pending_products}
                        </span>
                        <span class="stat-tile__label">"Pending Products"</span>
                    </div>
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || statistics.get().total_reviews}</span>
                        <span class="stat-tile__label">"Total Reviews"</span>
                    </div>
                    <div class="stat-tile">
                        <span class="stat-tile__value">{move || statistics.get().total_users}</span>
                        <span class="stat-tile__label">"Total Users"</span>
                    </div>
                </div>
            </Show>
        </div>
    }
}
