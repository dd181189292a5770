//! Not-found fallback page.

use leptos::prelude::*;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="error-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href="/">
                "Back to Home"
            </a>
        </div>
    }
}
