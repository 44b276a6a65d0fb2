use super::*;

fn customer(name: &str) -> User {
    User {
        id: 9,
        name: name.to_owned(),
        email: "pat@example.com".to_owned(),
        role: "customer".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_logged_in());
}

// =============================================================
// Session view
// =============================================================

#[test]
fn logged_in_with_user_present() {
    let state = AuthState {
        user: Some(customer("Pat")),
    };
    assert!(state.is_logged_in());
}

#[test]
fn avatar_letter_uppercases_first_char() {
    let state = AuthState {
        user: Some(customer("pat")),
    };
    assert_eq!(state.avatar_letter(), 'P');
}

#[test]
fn avatar_letter_defaults_when_logged_out() {
    assert_eq!(AuthState::default().avatar_letter(), 'U');
}

#[test]
fn avatar_letter_defaults_on_empty_name() {
    let state = AuthState {
        user: Some(customer("")),
    };
    assert_eq!(state.avatar_letter(), 'U');
}
