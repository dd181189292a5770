//! Admin user management: promote users to moderator or admin.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Role, UserRecord};
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let users = RwSignal::new(Vec::<UserRecord>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api::fetch_users().await {
                    Ok(items) => users.set(items),
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

    let promote = move |id: String, target: Role| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match target {
                    Role::Moderator => api::promote_moderator(&id).await,
                    Role::Admin => api::promote_admin(&id).await,
                    Role::User => return,
                };
                match result {
                    Ok(outcome) if outcome.modified() => {
                        notify.update(|n| {
                            n.success("User role updated.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Role was not changed.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, target);
        }
    };

    view! {
        <div class="manage-users-page">
            <h1>"Manage Users"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading users..."</p> }>
                <table class="dashboard-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let moderator_id = user.id.clone();
                                    let admin_id = user.id.clone();
                                    let role = user.role.unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td>{user.name}</td>
                                            <td>{user.email}</td>
                                            <td>
                                                {match role {
                                                    Role::Admin => "Admin",
                                                    Role::Moderator => "Moderator",
                                                    Role::User => "User",
                                                }}
                                            </td>
                                            <td class="dashboard-table__actions">
                                                <button
                                                    class="btn"
                                                    disabled=role == Role::Moderator
                                                    on:click=move |_| promote(
                                                        moderator_id.clone(),
                                                        Role::Moderator,
                                                    )
                                                >
                                                    "Make Moderator"
                                                </button>
                                                <button
                                                    class="btn"
                                                    disabled=role == Role::Admin
                                                    on:click=move |_| promote(admin_id.clone(), Role::Admin)
                                                >
                                                    "Make Admin"
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
