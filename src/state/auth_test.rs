use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn from_session_is_empty_without_a_browser() {
    let state = AuthState::from_session();
    assert!(state.user.is_none());
    assert!(!state.loading);
}
