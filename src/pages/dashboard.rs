//! Dashboard layout: role-aware sidebar navigation around an outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! This layout renders inside the authenticated guard, so an identity is
//! present by the time it mounts. The menu shows only the leaves the
//! resolved role may enter; the per-leaf guards still enforce access.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::hooks::role::use_role;
use crate::net::types::Role;
use crate::state::ui::UiState;

/// One sidebar navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub href: &'static str,
    pub label: &'static str,
}

const USER_ITEMS: [MenuItem; 3] = [
    MenuItem { href: "/dashboard/userProfile", label: "My Profile" },
    MenuItem { href: "/dashboard/addProduct", label: "Add Product" },
    MenuItem { href: "/dashboard/myProducts", label: "My Products" },
];

const MODERATOR_ITEMS: [MenuItem; 2] = [
    MenuItem { href: "/dashboard/productReviewQueue", label: "Review Queue" },
    MenuItem { href: "/dashboard/reportedContents", label: "Reported Contents" },
];

const ADMIN_ITEMS: [MenuItem; 3] = [
    MenuItem { href: "/dashboard/statistics", label: "Statistics" },
    MenuItem { href: "/dashboard/manageUsers", label: "Manage Users" },
    MenuItem { href: "/dashboard/manageCoupons", label: "Manage Coupons" },
];

/// The navigation entries visible to `role`. Every signed-in user gets the
/// base items; moderator and admin leaves appear only for the matching
/// role, mirroring what the route guards will allow.
pub fn menu_items(role: Option<Role>) -> Vec<MenuItem> {
    let mut items = USER_ITEMS.to_vec();
    match role {
        Some(Role::Moderator) => items.extend(MODERATOR_ITEMS),
        Some(Role::Admin) => items.extend(ADMIN_ITEMS),
        Some(Role::User) | None => {}
    }
    items
}

fn role_label(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => "Admin",
        Some(Role::Moderator) => "Moderator",
        _ => "User",
    }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let roles = use_role();

    view! {
        <div class="dashboard">
            <aside
                class="dashboard__sidebar"
                class:dashboard__sidebar--open=move || ui.get().sidebar_open
            >
                <div class="dashboard__header">
                    <h1>"Dashboard"</h1>
                    <p class="dashboard__role">"Role: " {move || role_label(roles.get().role)}</p>
                </div>
                <nav class="dashboard__nav">
                    {move || {
                        menu_items(roles.get().role)
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a
                                        class="dashboard__nav-link"
                                        href=item.href
                                        on:click=move |_| ui.update(|u| u.sidebar_open = false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <div class="dashboard__nav-divider"></div>
                    <a class="dashboard__nav-link" href="/">
                        "Home"
                    </a>
                </nav>
            </aside>

            <main class="dashboard__main">
                <header class="dashboard__topbar">
                    <button
                        class="dashboard__menu-toggle"
                        on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
                    >
                        "☰"
                    </button>
                </header>
                <div class="dashboard__content">
                    <Outlet/>
                </div>
            </main>
        </div>
    }
}

/// Landing view for the bare `/dashboard` route.
#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <div class="dashboard-home">
            <h2>"Welcome to your dashboard"</h2>
            <p>"Pick a section from the sidebar to get started."</p>
        </div>
    }
}
