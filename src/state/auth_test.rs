use super::*;

fn admin() -> UserProfile {
    UserProfile {
        id: 1,
        username: "admin".to_owned(),
        email: "admin@sherpa.ai".to_owned(),
        role: "Administrator".to_owned(),
    }
}

#[test]
fn default_is_anonymous() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn login_records_profile() {
    let mut state = AuthState::default();
    state.login(admin());
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("admin"));
}

#[test]
fn logout_returns_to_anonymous() {
    let mut state = AuthState::default();
    state.login(admin());
    state.logout();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn login_after_logout_is_allowed() {
    let mut state = AuthState::default();
    state.login(admin());
    state.logout();
    state.login(admin());
    assert!(state.is_authenticated);
}
