//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and product surfaces while reading shared
//! state from Leptos context providers; mutation goes through hooks.

pub mod banner;
pub mod coupon_slider;
pub mod featured_products;
pub mod footer;
pub mod navbar;
pub mod product_card;
pub mod toast;
pub mod trending_products;
