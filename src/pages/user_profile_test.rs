use super::*;

#[test]
fn intent_id_extracted_from_client_secret() {
    assert_eq!(intent_id_from_client_secret("pi_123_secret_456"), Some("pi_123"));
}

#[test]
fn intent_id_missing_marker_yields_none() {
    assert_eq!(intent_id_from_client_secret("pi_123"), None);
}

#[test]
fn intent_id_rejects_empty_prefix() {
    assert_eq!(intent_id_from_client_secret("_secret_456"), None);
}

#[test]
fn discounted_price_applies_percentage() {
    assert!((discounted_price(9.99, 0.0) - 9.99).abs() < f64::EPSILON);
    assert!((discounted_price(10.0, 25.0) - 7.5).abs() < f64::EPSILON);
}

#[test]
fn discounted_price_never_goes_negative() {
    assert!(discounted_price(9.99, 150.0).abs() < f64::EPSILON);
}
