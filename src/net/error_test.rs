use super::*;

#[test]
fn from_status_maps_auth_codes_to_unauthorized() {
    assert_eq!(RequestError::from_status(401, None), RequestError::Unauthorized);
    assert_eq!(RequestError::from_status(403, None), RequestError::Unauthorized);
}

#[test]
fn from_status_maps_conflict_to_already_voted() {
    assert_eq!(RequestError::from_status(409, None), RequestError::AlreadyVoted);
}

#[test]
fn from_status_keeps_other_codes_with_message() {
    let err = RequestError::from_status(500, Some("boom".to_owned()));
    assert_eq!(err, RequestError::Status { status: 500, message: Some("boom".to_owned()) });
}

#[test]
fn status_display_includes_server_message() {
    let err = RequestError::Status { status: 422, message: Some("bad tags".to_owned()) };
    assert_eq!(err.to_string(), "request failed: 422 (bad tags)");
}

#[test]
fn status_display_without_message() {
    let err = RequestError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn user_message_prefers_server_message() {
    let err = RequestError::Status { status: 422, message: Some("bad tags".to_owned()) };
    assert_eq!(err.user_message(), "bad tags");
}

#[test]
fn unauthorized_becomes_invalid_credentials_for_auth() {
    let auth: AuthError = RequestError::Unauthorized.into();
    assert_eq!(auth, AuthError::InvalidCredentials);
}

#[test]
fn network_error_becomes_auth_network_failure() {
    let auth: AuthError = RequestError::Network("offline".to_owned()).into();
    assert!(matches!(auth, AuthError::NetworkFailure(_)));
}

#[test]
fn auth_error_display_is_user_presentable() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "incorrect email or password");
    assert_eq!(AuthError::ProviderCancelled.to_string(), "sign-in was cancelled");
}
