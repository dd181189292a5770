//! Static contact page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="TechHive | Contact"/>
        <div class="static-page contact-page">
            <h1>"Contact Us"</h1>
            <p>"Questions, feedback, or partnership ideas? We read everything."</p>
            <ul class="contact-page__channels">
                <li>"Email: support@techhive.example"</li>
                <li>"Twitter: @techhive"</li>
            </ul>
        </div>
    }
}
