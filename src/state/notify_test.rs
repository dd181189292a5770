use super::*;

#[test]
fn success_and_error_queue_notices_in_order() {
    let mut state = NotifyState::default();
    state.success("saved");
    state.error("failed");
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.notices[0].level, NoticeLevel::Success);
    assert_eq!(state.notices[1].level, NoticeLevel::Error);
    assert_eq!(state.notices[1].text, "failed");
}

#[test]
fn notices_get_distinct_ids() {
    let mut state = NotifyState::default();
    let first = state.success("one");
    let second = state.success("two");
    assert_ne!(first, second);
}

#[test]
fn dismiss_removes_only_the_named_notice() {
    let mut state = NotifyState::default();
    let first = state.success("one");
    state.success("two");
    state.dismiss(&first);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].text, "two");
}

#[test]
fn dismiss_ignores_unknown_ids() {
    let mut state = NotifyState::default();
    state.success("one");
    state.dismiss("missing");
    assert_eq!(state.notices.len(), 1);
}
