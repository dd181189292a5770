use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn accepts_plain_email() {
    assert!(is_valid_email("user@example.com"));
}

#[test]
fn accepts_email_with_surrounding_whitespace() {
    assert!(is_valid_email("  user@example.com  "));
}

#[test]
fn rejects_missing_at_sign() {
    assert!(!is_valid_email("user.example.com"));
}

#[test]
fn rejects_missing_local_part() {
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn rejects_dotless_domain() {
    assert!(!is_valid_email("user@example"));
}

#[test]
fn rejects_domain_edge_dots() {
    assert!(!is_valid_email("user@.example.com"));
    assert!(!is_valid_email("user@example.com."));
}

// =============================================================
// Password
// =============================================================

#[test]
fn rejects_short_password() {
    assert!(validate_password("Ab1").is_err());
}

#[test]
fn rejects_password_without_uppercase() {
    assert!(validate_password("abcdef").is_err());
}

#[test]
fn rejects_password_without_lowercase() {
    assert!(validate_password("ABCDEF").is_err());
}

#[test]
fn accepts_mixed_case_password() {
    assert!(validate_password("Abcdef").is_ok());
}

// =============================================================
// require_trimmed
// =============================================================

#[test]
fn require_trimmed_trims_and_requires_value() {
    assert_eq!(require_trimmed("  hello  ", "need it"), Ok("hello".to_owned()));
    assert_eq!(require_trimmed("   ", "need it"), Err("need it"));
}

// =============================================================
// parse_tags
// =============================================================

#[test]
fn parse_tags_splits_and_trims() {
    assert_eq!(parse_tags("ai, web , tools"), vec!["ai", "web", "tools"]);
}

#[test]
fn parse_tags_strips_leading_hash() {
    assert_eq!(parse_tags("#ai, #web"), vec!["ai", "web"]);
}

#[test]
fn parse_tags_drops_empty_and_duplicate_entries() {
    assert_eq!(parse_tags("ai,, ai ,web"), vec!["ai", "web"]);
}

#[test]
fn parse_tags_empty_input_yields_no_tags() {
    assert!(parse_tags("   ").is_empty());
}
