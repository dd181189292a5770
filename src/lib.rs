//! # techhive
//!
//! Leptos + WASM single-page client for the TechHive product discovery
//! platform. The crate is a presentation-layer client over the TechHive
//! REST backend: session and role state, route guards for the role-gated
//! dashboards, cached product collections, and the pages that render them.

pub mod app;
pub mod components;
pub mod guard;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
