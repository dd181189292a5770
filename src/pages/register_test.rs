use super::*;

#[test]
fn validate_registration_accepts_complete_input() {
    let input = validate_registration("Alice", "a@x.com", "https://img.example/a.png", "Secret1");
    assert_eq!(
        input,
        Ok(RegistrationInput {
            name: "Alice".to_owned(),
            email: "a@x.com".to_owned(),
            photo_url: "https://img.example/a.png".to_owned(),
            password: "Secret1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_requires_name() {
    assert_eq!(
        validate_registration("  ", "a@x.com", "url", "Secret1"),
        Err("Enter your full name.")
    );
}

#[test]
fn validate_registration_rejects_bad_email() {
    assert_eq!(
        validate_registration("Alice", "nope", "url", "Secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_enforces_password_policy() {
    assert!(validate_registration("Alice", "a@x.com", "url", "short").is_err());
    assert!(validate_registration("Alice", "a@x.com", "url", "alllowercase").is_err());
    assert!(validate_registration("Alice", "a@x.com", "url", "ALLUPPERCASE").is_err());
}
