//! Top navigation bar with session-aware actions and theme toggle.

use leptos::prelude::*;

use crate::hooks::session;
use crate::state::auth::SessionStore;
use crate::state::role::RoleCache;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Navbar() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let signed_in = move || session_store.get().signed_in();
    let display_name = move || {
        session_store.get().identity.map(|i| i.name).unwrap_or_default()
    };
    let avatar_url = move || {
        session_store
            .get()
            .identity
            .and_then(|i| i.photo_url)
            .unwrap_or_else(|| "/img/avatar-placeholder.svg".to_owned())
    };

    let on_logout = move |_| {
        session::sign_out(session_store, roles);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "TechHive"
            </a>
            <div class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/about">"About Us"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <div class="navbar__actions">
                <button
                    class="navbar__theme-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a class="btn navbar__login" href="/login">
                                "Login"
                            </a>
                            <a class="btn btn--primary navbar__register" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="navbar__profile" href="/dashboard" title=display_name>
                        <img class="navbar__avatar" src=avatar_url alt="Profile"/>
                    </a>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
