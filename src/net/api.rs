//! REST endpoint wrappers for the TechHive backend.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns a typed `Result`; callers surface failures as
//! notices or inline messages. Nothing here triggers UI side effects;
//! notification stays a separate, composable effect at the call site.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::client::{PublicClient, SecureClient, base_url, join_url};
use crate::net::error::{AuthError, RequestError};
use crate::net::types::{
    Coupon, CouponApplication, DeleteOutcome, Identity, InsertOutcome, PaymentIntent, Product,
    ProductPage, ProductPatch, ProductStatus, ProductSubmission, Review, ReviewAck, Role,
    RoleResponse, SessionPayload, Statistics, UpdateOutcome, UserRecord,
};

// =============================================================
// Path helpers
// =============================================================

/// Percent-encode the handful of characters that would corrupt a query
/// value; search terms and emails need nothing heavier.
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(ch),
        }
    }
    out
}

fn role_endpoint(email: &str) -> String {
    format!("/users/role/{}", encode_query(email))
}

fn accepted_products_endpoint(search: &str, page: u32, limit: u32) -> String {
    format!("/accepted-products?search={}&page={page}&limit={limit}", encode_query(search))
}

fn my_products_endpoint(email: &str) -> String {
    format!("/products?email={}", encode_query(email))
}

fn product_endpoint(id: &str) -> String {
    format!("/product/{id}")
}

fn upvote_endpoint(id: &str) -> String {
    format!("/upvote/{id}")
}

fn reviews_endpoint(product_id: &str) -> String {
    format!("/reviews/{product_id}")
}

fn report_endpoint(id: &str) -> String {
    format!("/report/{id}")
}

/// Provider gateway URL for the federated sign-in redirect.
pub fn federated_sign_in_url() -> String {
    join_url(base_url(), "auth/federated")
}

// =============================================================
// Session
// =============================================================

/// Sign in with email and password. A 401 from the backend maps to
/// [`AuthError::InvalidCredentials`].
pub async fn sign_in(email: &str, password: &str) -> Result<SessionPayload, AuthError> {
    let body = serde_json::json!({ "email": email, "password": password });
    PublicClient::new().post("/auth/sign-in", &body).await.map_err(AuthError::from)
}

/// Register a new account and open its first session.
pub async fn sign_up(
    name: &str,
    email: &str,
    photo_url: &str,
    password: &str,
) -> Result<SessionPayload, AuthError> {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "photoUrl": photo_url,
        "password": password,
    });
    PublicClient::new().post("/auth/sign-up", &body).await.map_err(AuthError::from)
}

/// Restore the identity behind the persisted token.
pub async fn fetch_session() -> Result<Identity, RequestError> {
    SecureClient::from_storage().get("/auth/session").await
}

/// Upsert the user record after a successful sign-in. Idempotent: the
/// backend omits `insertedId` when the record already exists.
pub async fn upsert_user(name: &str, email: &str) -> Result<InsertOutcome, RequestError> {
    let body = serde_json::json!({ "name": name, "email": email });
    PublicClient::new().post("/users", &body).await
}

// =============================================================
// Roles
// =============================================================

/// Resolve the enumerated role for `email`. Callers must never invoke this
/// for an absent identity; the role cache enforces one query per identity.
pub async fn fetch_role(email: &str) -> Result<Role, RequestError> {
    let response: RoleResponse = SecureClient::from_storage().get(&role_endpoint(email)).await?;
    Ok(response.role)
}

// =============================================================
// Products
// =============================================================

/// One page of accepted products for the public listing.
pub async fn fetch_accepted_products(
    search: &str,
    page: u32,
    limit: u32,
) -> Result<ProductPage, RequestError> {
    PublicClient::new().get(&accepted_products_endpoint(search, page, limit)).await
}

/// Featured products for the home page. Uses the secure client once an
/// identity is known, the public client otherwise.
pub async fn fetch_featured_products(signed_in: bool) -> Result<Vec<Product>, RequestError> {
    if signed_in {
        SecureClient::from_storage().get("/featured-products").await
    } else {
        PublicClient::new().get("/featured-products").await
    }
}

/// Trending products (highest vote counts) for the home page.
pub async fn fetch_trending_products(signed_in: bool) -> Result<Vec<Product>, RequestError> {
    if signed_in {
        SecureClient::from_storage().get("/trending-products").await
    } else {
        PublicClient::new().get("/trending-products").await
    }
}

/// Every product, for the moderation review queue.
pub async fn fetch_all_products() -> Result<Vec<Product>, RequestError> {
    SecureClient::from_storage().get("/products").await
}

/// Products owned by `email`.
pub async fn fetch_my_products(email: &str) -> Result<Vec<Product>, RequestError> {
    PublicClient::new().get(&my_products_endpoint(email)).await
}

/// A single product by id.
pub async fn fetch_product(id: &str) -> Result<Product, RequestError> {
    SecureClient::from_storage().get(&product_endpoint(id)).await
}

/// Submit a new product for moderation.
pub async fn submit_product(product: &ProductSubmission) -> Result<InsertOutcome, RequestError> {
    SecureClient::from_storage().post("/products", product).await
}

/// Update an owned product's editable fields.
pub async fn update_product(id: &str, patch: &ProductPatch) -> Result<UpdateOutcome, RequestError> {
    SecureClient::from_storage().patch(&format!("/products/{id}"), patch).await
}

/// Delete an owned product.
pub async fn delete_product(id: &str) -> Result<DeleteOutcome, RequestError> {
    SecureClient::from_storage().delete(&format!("/products/{id}")).await
}

/// Move a product through the moderation pipeline.
pub async fn set_product_status(
    id: &str,
    status: ProductStatus,
) -> Result<UpdateOutcome, RequestError> {
    let body = serde_json::json!({ "status": status });
    SecureClient::from_storage().patch(&format!("/products/status/{id}"), &body).await
}

/// Mark a product as featured on the home page.
pub async fn set_product_featured(id: &str) -> Result<UpdateOutcome, RequestError> {
    let body = serde_json::json!({ "featured": true });
    SecureClient::from_storage().patch(&format!("/products/status/{id}"), &body).await
}

/// Cast an upvote. The backend is the source of truth for duplicates: a
/// repeat vote (or an owner voting) comes back as
/// [`RequestError::AlreadyVoted`].
pub async fn upvote_product(id: &str, email: &str) -> Result<UpdateOutcome, RequestError> {
    let body = serde_json::json!({ "email": email });
    SecureClient::from_storage().patch(&upvote_endpoint(id), &body).await
}

/// Report a product for moderator attention.
pub async fn report_product(id: &str, email: &str) -> Result<UpdateOutcome, RequestError> {
    let body = serde_json::json!({ "email": email });
    SecureClient::from_storage().post(&report_endpoint(id), &body).await
}

/// Products flagged by reports, for the moderator dashboard.
pub async fn fetch_reported_products() -> Result<Vec<Product>, RequestError> {
    SecureClient::from_storage().get("/reported-products").await
}

/// Remove a reported product outright.
pub async fn delete_reported_product(id: &str) -> Result<DeleteOutcome, RequestError> {
    SecureClient::from_storage().delete(&format!("/reported-products/{id}")).await
}

// =============================================================
// Users (admin)
// =============================================================

pub async fn fetch_users() -> Result<Vec<UserRecord>, RequestError> {
    SecureClient::from_storage().get("/users").await
}

pub async fn fetch_user(email: &str) -> Result<UserRecord, RequestError> {
    SecureClient::from_storage().get(&format!("/users/{}", encode_query(email))).await
}

pub async fn promote_moderator(id: &str) -> Result<UpdateOutcome, RequestError> {
    SecureClient::from_storage().patch(&format!("/users/moderator/{id}"), &serde_json::json!({})).await
}

pub async fn promote_admin(id: &str) -> Result<UpdateOutcome, RequestError> {
    SecureClient::from_storage().patch(&format!("/users/admin/{id}"), &serde_json::json!({})).await
}

// =============================================================
// Reviews
// =============================================================

pub async fn fetch_reviews(product_id: &str) -> Result<Vec<Review>, RequestError> {
    SecureClient::from_storage().get(&reviews_endpoint(product_id)).await
}

pub async fn post_review(review: &Review) -> Result<ReviewAck, RequestError> {
    SecureClient::from_storage().post("/reviews", review).await
}

// =============================================================
// Coupons, statistics, membership
// =============================================================

pub async fn fetch_coupons() -> Result<Vec<Coupon>, RequestError> {
    PublicClient::new().get("/coupons").await
}

pub async fn create_coupon(coupon: &Coupon) -> Result<InsertOutcome, RequestError> {
    SecureClient::from_storage().post("/coupons", coupon).await
}

pub async fn update_coupon(id: &str, coupon: &Coupon) -> Result<UpdateOutcome, RequestError> {
    SecureClient::from_storage().put(&format!("/coupons/{id}"), coupon).await
}

pub async fn delete_coupon(id: &str) -> Result<DeleteOutcome, RequestError> {
    SecureClient::from_storage().delete(&format!("/coupons/{id}")).await
}

pub async fn fetch_statistics() -> Result<Statistics, RequestError> {
    SecureClient::from_storage().get("/admin/statistics").await
}

pub async fn create_payment_intent(amount: f64) -> Result<PaymentIntent, RequestError> {
    let body = serde_json::json!({ "amount": amount });
    SecureClient::from_storage().post("/create-payment-intent", &body).await
}

pub async fn apply_coupon(code: &str) -> Result<CouponApplication, RequestError> {
    let body = serde_json::json!({ "code": code });
    SecureClient::from_storage().post("/apply-coupon", &body).await
}

pub async fn subscribe(email: &str, transaction_id: &str) -> Result<UpdateOutcome, RequestError> {
    let body = serde_json::json!({ "email": email, "transactionId": transaction_id });
    SecureClient::from_storage().post("/users/subscribe", &body).await
}
