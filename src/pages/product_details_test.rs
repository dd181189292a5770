use super::*;

#[test]
fn validate_review_accepts_rating_and_text() {
    assert_eq!(validate_review(4, "  solid tool  "), Ok("solid tool".to_owned()));
}

#[test]
fn validate_review_rejects_out_of_range_rating() {
    assert!(validate_review(0, "text").is_err());
    assert!(validate_review(6, "text").is_err());
}

#[test]
fn validate_review_requires_description() {
    assert_eq!(validate_review(5, "   "), Err("Write a few words about the product."));
}
