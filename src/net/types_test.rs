use super::*;

fn product_json() -> &'static str {
    r#"{
        "_id": "p1",
        "productName": "Widget",
        "productImage": "https://img.example/w.png",
        "description": "A widget.",
        "tags": ["ai", "tools"],
        "name": "Alice",
        "email": "alice@example.com",
        "image": "https://img.example/a.png",
        "status": "Accepted",
        "upvote": 3,
        "votedUsers": ["bob@example.com"],
        "createdAt": "2025-01-05T10:00:00Z"
    }"#
}

// =============================================================
// Product
// =============================================================

#[test]
fn product_deserializes_backend_field_names() {
    let product: Product = serde_json::from_str(product_json()).expect("deserialize");
    assert_eq!(product.id, "p1");
    assert_eq!(product.product_name, "Widget");
    assert_eq!(product.owner_email, "alice@example.com");
    assert_eq!(product.status, ProductStatus::Accepted);
    assert_eq!(product.upvote, 3);
    assert_eq!(product.voted_users, vec!["bob@example.com"]);
}

#[test]
fn product_defaults_optional_fields() {
    let product: Product = serde_json::from_str(
        r#"{"_id": "p2", "productName": "Bare", "productImage": "x", "email": "o@example.com"}"#,
    )
    .expect("deserialize");
    assert_eq!(product.status, ProductStatus::Pending);
    assert!(!product.featured);
    assert_eq!(product.upvote, 0);
    assert!(product.voted_users.is_empty());
    assert!(product.external_link.is_none());
}

#[test]
fn vote_disabled_for_owner() {
    let product: Product = serde_json::from_str(product_json()).expect("deserialize");
    assert!(product.vote_disabled_for("alice@example.com"));
}

#[test]
fn vote_disabled_for_existing_voter() {
    let product: Product = serde_json::from_str(product_json()).expect("deserialize");
    assert!(product.vote_disabled_for("bob@example.com"));
}

#[test]
fn vote_enabled_for_fresh_voter() {
    let product: Product = serde_json::from_str(product_json()).expect("deserialize");
    assert!(!product.vote_disabled_for("carol@example.com"));
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_lowercase() {
    let response: RoleResponse = serde_json::from_str(r#"{"role": "admin"}"#).expect("deserialize");
    assert_eq!(response.role, Role::Admin);
    let response: RoleResponse =
        serde_json::from_str(r#"{"role": "moderator"}"#).expect("deserialize");
    assert_eq!(response.role, Role::Moderator);
}

#[test]
fn role_default_is_user() {
    assert_eq!(Role::default(), Role::User);
}

// =============================================================
// Outcome contracts
// =============================================================

#[test]
fn insert_outcome_with_id_is_created() {
    let outcome: InsertOutcome =
        serde_json::from_str(r#"{"insertedId": "abc"}"#).expect("deserialize");
    assert_eq!(outcome, InsertOutcome::Created("abc".to_owned()));
    assert!(outcome.created());
}

#[test]
fn insert_outcome_without_id_is_already_exists() {
    let outcome: InsertOutcome = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(outcome, InsertOutcome::AlreadyExists);
    assert!(!outcome.created());
}

#[test]
fn insert_outcome_null_id_is_already_exists() {
    let outcome: InsertOutcome =
        serde_json::from_str(r#"{"insertedId": null}"#).expect("deserialize");
    assert_eq!(outcome, InsertOutcome::AlreadyExists);
}

#[test]
fn update_outcome_positive_count_is_modified() {
    let outcome: UpdateOutcome =
        serde_json::from_str(r#"{"modifiedCount": 1}"#).expect("deserialize");
    assert!(outcome.modified());
}

#[test]
fn update_outcome_zero_count_is_unchanged() {
    let outcome: UpdateOutcome =
        serde_json::from_str(r#"{"modifiedCount": 0}"#).expect("deserialize");
    assert!(!outcome.modified());
}

#[test]
fn delete_outcome_maps_deleted_count() {
    let outcome: DeleteOutcome =
        serde_json::from_str(r#"{"deletedCount": 1}"#).expect("deserialize");
    assert!(outcome.deleted());
    let outcome: DeleteOutcome = serde_json::from_str("{}").expect("deserialize");
    assert!(!outcome.deleted());
}

// =============================================================
// Session payload
// =============================================================

#[test]
fn session_payload_carries_token_and_identity() {
    let payload: SessionPayload = serde_json::from_str(
        r#"{"token": "t1", "user": {"email": "a@b.com", "name": "A", "photoUrl": null}}"#,
    )
    .expect("deserialize");
    assert_eq!(payload.token, "t1");
    assert_eq!(payload.user.email, "a@b.com");
}

#[test]
fn statistics_defaults_missing_counters() {
    let stats: Statistics =
        serde_json::from_str(r#"{"acceptedProducts": 5}"#).expect("deserialize");
    assert_eq!(stats.accepted_products, 5);
    assert_eq!(stats.total_users, 0);
}
