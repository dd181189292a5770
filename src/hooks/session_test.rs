use super::*;

#[test]
fn plain_fragment_is_not_a_callback() {
    assert_eq!(parse_callback_fragment(""), CallbackOutcome::None);
    assert_eq!(parse_callback_fragment("#section-2"), CallbackOutcome::None);
}

#[test]
fn token_fragment_yields_token() {
    assert_eq!(
        parse_callback_fragment("#token=abc123"),
        CallbackOutcome::Token("abc123".to_owned())
    );
}

#[test]
fn token_fragment_without_hash_prefix() {
    assert_eq!(parse_callback_fragment("token=abc"), CallbackOutcome::Token("abc".to_owned()));
}

#[test]
fn empty_token_is_not_a_callback() {
    assert_eq!(parse_callback_fragment("#token="), CallbackOutcome::None);
}

#[test]
fn error_fragment_is_cancelled() {
    assert_eq!(parse_callback_fragment("#error=access_denied"), CallbackOutcome::Cancelled);
    assert_eq!(parse_callback_fragment("#error=cancelled"), CallbackOutcome::Cancelled);
}

#[test]
fn token_wins_when_listed_first() {
    assert_eq!(
        parse_callback_fragment("#token=abc&state=xyz"),
        CallbackOutcome::Token("abc".to_owned())
    );
}
