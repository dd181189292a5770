//! Home page: banner, featured and trending products, coupon deals.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::banner::Banner;
use crate::components::coupon_slider::CouponSlider;
use crate::components::featured_products::FeaturedProducts;
use crate::components::trending_products::TrendingProducts;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="TechHive | Home"/>
        <div class="home-page">
            <Banner/>
            <FeaturedProducts/>
            <TrendingProducts/>
            <CouponSlider/>
            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <div class="how-it-works__steps">
                    <div class="how-it-works__step">
                        <h3>"Discover"</h3>
                        <p>"Browse products submitted by the community."</p>
                    </div>
                    <div class="how-it-works__step">
                        <h3>"Vote"</h3>
                        <p>"Upvote the products you find most useful."</p>
                    </div>
                    <div class="how-it-works__step">
                        <h3>"Share"</h3>
                        <p>"Submit your own product and get feedback."</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
