//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__title">"TechHive"</span>
                <p class="footer__tagline">
                    "Discover, share, and vote on the latest tech products."
                </p>
            </div>
            <div class="footer__links">
                <a href="/about">"About Us"</a>
                <a href="/contact">"Contact"</a>
                <a href="/products">"Products"</a>
            </div>
            <p class="footer__copyright">"© 2025 TechHive. All rights reserved."</p>
        </footer>
    }
}
