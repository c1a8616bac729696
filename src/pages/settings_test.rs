use super::*;

#[test]
fn default_tab_is_notifications() {
    assert_eq!(Tab::default(), Tab::Notifications);
}

#[test]
fn integration_notice_names_the_state_change() {
    assert_eq!(integration_notice("Slack", true), "Slack integration has been enabled.");
    assert_eq!(integration_notice("Jira", false), "Jira integration has been disabled.");
}

#[test]
fn preference_options_include_the_defaults() {
    let defaults = SettingsState::default();
    assert!(LANGUAGES.contains(&defaults.preferences.language.as_str()));
    assert!(TIMEZONES.contains(&defaults.preferences.timezone.as_str()));
    assert!(DATE_FORMATS.contains(&defaults.preferences.date_format.as_str()));
}
