//! Settings state: four independent configuration groups.
//!
//! Each group is a flat record updated by shallow merge of an all-`Option`
//! patch. Nothing is persisted; values revert to the defaults below on
//! reload. There is deliberately no cross-field validation: the session
//! timeout and password expiry accept any integer, zero and negative
//! included.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// Alert delivery channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { email: true, push: true, sms: false }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NotificationPatch {
    pub email: Option<bool>,
    pub push: Option<bool>,
    pub sms: Option<bool>,
}

/// Account security options. Timeout is minutes, expiry is days.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    pub session_timeout: i64,
    pub password_expiry: i64,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self { two_factor_auth: false, session_timeout: 30, password_expiry: 90 }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SecurityPatch {
    pub two_factor_auth: Option<bool>,
    pub session_timeout: Option<i64>,
    pub password_expiry: Option<i64>,
}

/// Locale and formatting preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    pub language: String,
    pub timezone: String,
    pub date_format: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            timezone: "UTC".to_owned(),
            date_format: "MM/DD/YYYY".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PreferencePatch {
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
}

/// Third-party integration toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub slack: bool,
    pub jira: bool,
    pub github: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IntegrationPatch {
    pub slack: Option<bool>,
    pub jira: Option<bool>,
    pub github: Option<bool>,
}

/// All four groups, updated independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub preferences: PreferenceSettings,
    pub integrations: IntegrationSettings,
}

impl SettingsState {
    pub fn update_notifications(&mut self, patch: NotificationPatch) {
        if let Some(email) = patch.email {
            self.notifications.email = email;
        }
        if let Some(push) = patch.push {
            self.notifications.push = push;
        }
        if let Some(sms) = patch.sms {
            self.notifications.sms = sms;
        }
    }

    pub fn update_security(&mut self, patch: SecurityPatch) {
        if let Some(two_factor_auth) = patch.two_factor_auth {
            self.security.two_factor_auth = two_factor_auth;
        }
        if let Some(session_timeout) = patch.session_timeout {
            self.security.session_timeout = session_timeout;
        }
        if let Some(password_expiry) = patch.password_expiry {
            self.security.password_expiry = password_expiry;
        }
    }

    pub fn update_preferences(&mut self, patch: PreferencePatch) {
        if let Some(language) = patch.language {
            self.preferences.language = language;
        }
        if let Some(timezone) = patch.timezone {
            self.preferences.timezone = timezone;
        }
        if let Some(date_format) = patch.date_format {
            self.preferences.date_format = date_format;
        }
    }

    pub fn update_integrations(&mut self, patch: IntegrationPatch) {
        if let Some(slack) = patch.slack {
            self.integrations.slack = slack;
        }
        if let Some(jira) = patch.jira {
            self.integrations.jira = jira;
        }
        if let Some(github) = patch.github {
            self.integrations.github = github;
        }
    }
}
