//! Active membership coupons for the home page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Coupon;

/// True when `expiry_date` parses to a time after `now_ms` (milliseconds
/// since the Unix epoch). Unparseable dates read as expired.
#[cfg(feature = "hydrate")]
fn coupon_is_active(expiry_date: &str, now_ms: f64) -> bool {
    let parsed = js_sys::Date::parse(expiry_date);
    parsed.is_finite() && parsed > now_ms
}

#[component]
pub fn CouponSlider() -> impl IntoView {
    let coupons = RwSignal::new(Vec::<Coupon>::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_coupons().await {
                    Ok(fetched) => {
                        let now_ms = js_sys::Date::now();
                        let active = fetched
                            .into_iter()
                            .filter(|c| coupon_is_active(&c.expiry_date, now_ms))
                            .collect::<Vec<_>>();
                        coupons.set(active);
                    }
                    Err(err) => {
                        leptos::logging::warn!("coupon fetch failed: {err}");
                    }
                }
            });
        }
    });

    view! {
        <Show when=move || !coupons.get().is_empty()>
            <section class="coupon-slider">
                <h2 class="coupon-slider__title">"Membership Deals"</h2>
                <div class="coupon-slider__track">
                    {move || {
                        coupons
                            .get()
                            .into_iter()
                            .map(|coupon| {
                                view! {
                                    <div class="coupon-card">
                                        <span class="coupon-card__discount">
                                            {format!("{:.0}% OFF", coupon.discount)}
                                        </span>
                                        <span class="coupon-card__code">{coupon.code}</span>
                                        <p class="coupon-card__description">{coupon.description}</p>
                                        <span class="coupon-card__expiry">
                                            "Valid until " {coupon.expiry_date}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </Show>
    }
}
