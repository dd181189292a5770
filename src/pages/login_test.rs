use super::*;

#[test]
fn validate_login_input_accepts_trimmed_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "Secret1"),
        Ok(("user@example.com".to_owned(), "Secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("not-an-email", "Secret1"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter your password."));
}
