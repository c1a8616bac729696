use super::*;

#[test]
fn demo_credentials_yield_the_admin_profile() {
    let profile = check_credentials("admin", "password123").unwrap();
    assert_eq!(profile.id, 1);
    assert_eq!(profile.username, "admin");
    assert_eq!(profile.email, "admin@sherpa.ai");
    assert_eq!(profile.role, "Administrator");
}

#[test]
fn wrong_password_is_rejected() {
    assert!(check_credentials("admin", "password").is_none());
}

#[test]
fn wrong_username_is_rejected() {
    assert!(check_credentials("root", "password123").is_none());
}

#[test]
fn credentials_are_case_sensitive() {
    assert!(check_credentials("Admin", "password123").is_none());
    assert!(check_credentials("admin", "Password123").is_none());
}

#[test]
fn empty_credentials_are_rejected() {
    assert!(check_credentials("", "").is_none());
}

#[test]
fn failure_notice_repeats_the_demo_hint() {
    assert!(INVALID_CREDENTIALS_NOTICE.contains("admin/password123"));
}
