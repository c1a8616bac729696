use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_product_baseline() {
    let state = SettingsState::default();
    assert!(state.notifications.email);
    assert!(state.notifications.push);
    assert!(!state.notifications.sms);
    assert!(!state.security.two_factor_auth);
    assert_eq!(state.security.session_timeout, 30);
    assert_eq!(state.security.password_expiry, 90);
    assert_eq!(state.preferences.language, "en");
    assert_eq!(state.preferences.timezone, "UTC");
    assert_eq!(state.preferences.date_format, "MM/DD/YYYY");
    assert_eq!(state.integrations, IntegrationSettings::default());
}

// =============================================================
// Shallow merge per group
// =============================================================

#[test]
fn notification_patch_touches_only_present_fields() {
    let mut state = SettingsState::default();
    state.update_notifications(NotificationPatch { sms: Some(true), ..NotificationPatch::default() });
    assert!(state.notifications.sms);
    assert!(state.notifications.email);
    assert!(state.notifications.push);
}

#[test]
fn security_patch_merges_shallowly() {
    let mut state = SettingsState::default();
    state.update_security(SecurityPatch { session_timeout: Some(60), ..SecurityPatch::default() });
    assert_eq!(state.security.session_timeout, 60);
    assert_eq!(state.security.password_expiry, 90);
    assert!(!state.security.two_factor_auth);
}

#[test]
fn security_accepts_unvalidated_integers() {
    // No range checking: zero and negative values pass through as-is.
    let mut state = SettingsState::default();
    state.update_security(SecurityPatch {
        session_timeout: Some(-5),
        password_expiry: Some(0),
        ..SecurityPatch::default()
    });
    assert_eq!(state.security.session_timeout, -5);
    assert_eq!(state.security.password_expiry, 0);
}

#[test]
fn preference_patch_replaces_strings() {
    let mut state = SettingsState::default();
    state.update_preferences(PreferencePatch {
        language: Some("de".to_owned()),
        ..PreferencePatch::default()
    });
    assert_eq!(state.preferences.language, "de");
    assert_eq!(state.preferences.timezone, "UTC");
}

#[test]
fn integration_toggles_are_independent() {
    let mut state = SettingsState::default();
    state.update_integrations(IntegrationPatch { jira: Some(true), ..IntegrationPatch::default() });
    assert!(state.integrations.jira);
    assert!(!state.integrations.slack);
    assert!(!state.integrations.github);
}

#[test]
fn groups_do_not_bleed_into_each_other() {
    let mut state = SettingsState::default();
    state.update_notifications(NotificationPatch { email: Some(false), ..NotificationPatch::default() });
    assert_eq!(state.security, SecuritySettings::default());
    assert_eq!(state.preferences, PreferenceSettings::default());
    assert_eq!(state.integrations, IntegrationSettings::default());
}

#[test]
fn empty_patch_is_identity() {
    let mut state = SettingsState::default();
    state.update_notifications(NotificationPatch::default());
    state.update_security(SecurityPatch::default());
    state.update_preferences(PreferencePatch::default());
    state.update_integrations(IntegrationPatch::default());
    assert_eq!(state, SettingsState::default());
}
