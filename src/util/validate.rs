//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation failures render inline next to the offending field; they are
//! the only error class that never reaches the network layer.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimal shape check for an email address: one `@` with a dot after it.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Password policy: at least 6 characters with one uppercase and one
/// lowercase letter.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password should be 6 characters or longer.");
    }
    if !password.chars().any(char::is_uppercase) || !password.chars().any(char::is_lowercase) {
        return Err("Password must contain at least one uppercase and one lowercase letter.");
    }
    Ok(())
}

/// Trim an input and require it to be non-empty.
pub fn require_trimmed(value: &str, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(message);
    }
    Ok(trimmed.to_owned())
}

/// Split a comma-separated tag input into trimmed, non-empty, deduplicated
/// tags, preserving first-seen order.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim().trim_start_matches('#').to_owned();
        if tag.is_empty() || tags.contains(&tag) {
            continue;
        }
        tags.push(tag);
    }
    tags
}
