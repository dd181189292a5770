use super::*;

#[test]
fn validate_coupon_form_accepts_complete_form() {
    let coupon = validate_coupon_form(" SAVE20 ", "20", "Spring sale", "2025-12-31")
        .expect("valid coupon");
    assert_eq!(coupon.code, "SAVE20");
    assert!((coupon.discount - 20.0).abs() < f64::EPSILON);
    assert_eq!(coupon.expiry_date, "2025-12-31");
}

#[test]
fn validate_coupon_form_requires_code() {
    assert_eq!(validate_coupon_form("  ", "20", "", "2025-12-31"), Err("Enter a coupon code."));
}

#[test]
fn validate_coupon_form_rejects_non_numeric_discount() {
    assert_eq!(
        validate_coupon_form("SAVE", "lots", "", "2025-12-31"),
        Err("Enter the discount as a number.")
    );
}

#[test]
fn validate_coupon_form_bounds_discount_percentage() {
    assert!(validate_coupon_form("SAVE", "0", "", "2025-12-31").is_err());
    assert!(validate_coupon_form("SAVE", "101", "", "2025-12-31").is_err());
    assert!(validate_coupon_form("SAVE", "100", "", "2025-12-31").is_ok());
}

#[test]
fn validate_coupon_form_requires_expiry() {
    assert_eq!(validate_coupon_form("SAVE", "20", "", " "), Err("Enter an expiry date."));
}
