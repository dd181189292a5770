use super::*;

#[test]
fn ui_state_defaults_to_light_theme_with_closed_sidebar() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
}
