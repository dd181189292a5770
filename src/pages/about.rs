//! Static about page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="TechHive | About Us"/>
        <div class="static-page about-page">
            <h1>"About TechHive"</h1>
            <p>
                "TechHive is a community-driven platform for discovering new tech "
                "products. Makers submit their work, moderators review it, and the "
                "community decides what rises with their votes."
            </p>
            <p>
                "Every product on the site was shared by a real person. Sign up to "
                "vote, review, and submit your own."
            </p>
        </div>
    }
}
