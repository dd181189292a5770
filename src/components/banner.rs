//! Home page hero banner.

use leptos::prelude::*;

#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <section class="banner">
            <div class="banner__copy">
                <h1 class="banner__title">"Discover Amazing Tech Products"</h1>
                <p class="banner__subtitle">
                    "Explore a curated collection of innovative products and vote for your favorites."
                </p>
                <a class="btn btn--primary banner__cta" href="/products">
                    "Browse Products"
                </a>
            </div>
        </section>
    }
}
