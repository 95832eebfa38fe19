use super::*;

#[test]
fn ui_state_defaults_to_login_screen() {
    let state = UiState::default();
    assert_eq!(state.auth_screen, AuthScreen::Login);
}

#[test]
fn ui_state_default_sidebar_open_panel_closed() {
    let state = UiState::default();
    assert!(state.sidebar_open);
    assert!(!state.right_panel_open);
}

#[test]
fn auth_screen_variants_are_distinct() {
    assert_ne!(AuthScreen::Login, AuthScreen::Signup);
}
