//! Wire DTOs for the TechHive REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase fields, Mongo
//! `_id` keys) so serde does all shape checking at the boundary. Mutation
//! endpoints get tagged outcome types instead of callers probing optional
//! counters for truthiness.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as held by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Email address; the unique key for role lookups and ownership checks.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    #[serde(default, rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// Response of the sign-in/sign-up endpoints: a bearer token plus profile.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionPayload {
    /// Bearer token for the secure client; persisted to localStorage.
    pub token: String,
    /// The signed-in user's profile.
    pub user: Identity,
}

/// Privilege level of a user, one per subject.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

/// Response of `GET /users/role/{email}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct RoleResponse {
    pub role: Role,
}

/// Moderation state of a submitted product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A product as represented in the wire protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Product display name.
    #[serde(rename = "productName")]
    pub product_name: String,
    /// Product image URL.
    #[serde(rename = "productImage")]
    pub product_image: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Optional link to the product's own site.
    #[serde(default, rename = "externalLink")]
    pub external_link: Option<String>,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Submitting user's display name.
    #[serde(default, rename = "name")]
    pub owner_name: String,
    /// Submitting user's email; owners may not vote on their own products.
    #[serde(rename = "email")]
    pub owner_email: String,
    /// Submitting user's avatar URL.
    #[serde(default, rename = "image")]
    pub owner_image: Option<String>,
    /// Moderation state.
    #[serde(default)]
    pub status: ProductStatus,
    /// Whether a moderator marked this product as featured.
    #[serde(default)]
    pub featured: bool,
    /// Upvote count.
    #[serde(default)]
    pub upvote: i64,
    /// Emails of users who already voted.
    #[serde(default, rename = "votedUsers")]
    pub voted_users: Vec<String>,
    /// ISO 8601 submission timestamp.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl Product {
    /// True if `email` already voted or owns this product; used only to
    /// disable the vote affordance. The backend stays the source of truth.
    pub fn vote_disabled_for(&self, email: &str) -> bool {
        self.owner_email == email || self.voted_users.iter().any(|v| v == email)
    }
}

/// One page of accepted products for the public listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Total matching products, when the backend reports it.
    #[serde(default)]
    pub total: Option<i64>,
}

/// A stored user record as listed in the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, rename = "isSubscribed")]
    pub is_subscribed: bool,
}

/// A product review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "reviewerName")]
    pub reviewer_name: String,
    #[serde(default, rename = "reviewerImage")]
    pub reviewer_image: Option<String>,
    #[serde(rename = "reviewDescription")]
    pub review_description: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
}

/// Acknowledgement of `POST /reviews`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewAck {
    #[serde(default)]
    pub success: bool,
}

/// A discount coupon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default, rename = "_id")]
    pub id: String,
    pub code: String,
    /// Discount percentage applied to the membership price.
    pub discount: f64,
    #[serde(default)]
    pub description: String,
    /// ISO 8601 expiry date; expired coupons are filtered client-side.
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
}

/// Aggregate site statistics for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Statistics {
    #[serde(default, rename = "acceptedProducts")]
    pub accepted_products: i64,
    #[serde(default, rename = "pendingProducts")]
    pub pending_products: i64,
    #[serde(default, rename = "totalReviews")]
    pub total_reviews: i64,
    #[serde(default, rename = "totalUsers")]
    pub total_users: i64,
}

/// Response of `POST /create-payment-intent`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PaymentIntent {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Response of `POST /apply-coupon`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CouponApplication {
    /// Discount percentage, zero when the code was invalid or expired.
    #[serde(default)]
    pub discount: f64,
}

/// A new product submission; the backend assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductSubmission {
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productImage")]
    pub product_image: String,
    pub description: String,
    #[serde(rename = "externalLink", skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    pub tags: Vec<String>,
    #[serde(rename = "name")]
    pub owner_name: String,
    #[serde(rename = "email")]
    pub owner_email: String,
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub owner_image: Option<String>,
    /// Always `Pending` on submission; moderation moves it on.
    pub status: ProductStatus,
    pub upvote: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Owner-editable fields of an existing product.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productImage")]
    pub product_image: String,
    pub description: String,
    #[serde(rename = "externalLink", skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    pub tags: Vec<String>,
}

/// Outcome of an insert endpoint (`POST /users`, `POST /products`).
///
/// The backend reports an inserted id only when a record was created; its
/// absence means the record already existed, which for the idempotent user
/// upsert is success rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Created(String),
    AlreadyExists,
}

impl InsertOutcome {
    pub fn created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

impl<'de> Deserialize<'de> for InsertOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default, rename = "insertedId")]
            inserted_id: Option<String>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(match raw.inserted_id {
            Some(id) => Self::Created(id),
            None => Self::AlreadyExists,
        })
    }
}

/// Outcome of an update endpoint (`PATCH /upvote/{id}`, status changes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Modified,
    Unchanged,
}

impl UpdateOutcome {
    pub fn modified(self) -> bool {
        matches!(self, Self::Modified)
    }
}

impl<'de> Deserialize<'de> for UpdateOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default, rename = "modifiedCount")]
            modified_count: i64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(if raw.modified_count > 0 { Self::Modified } else { Self::Unchanged })
    }
}

/// Outcome of a delete endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Missing,
}

impl DeleteOutcome {
    pub fn deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl<'de> Deserialize<'de> for DeleteOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default, rename = "deletedCount")]
            deleted_count: i64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(if raw.deleted_count > 0 { Self::Deleted } else { Self::Missing })
    }
}
