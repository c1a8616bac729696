//! Settings page: four live configuration groups plus account stubs.
//!
//! Every control dispatches a single-field patch to the settings store and
//! confirms with a notice. The account tab's actions are placeholders that
//! perform no state change.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::NOT_IMPLEMENTED_NOTICE;
use crate::state::auth::AuthState;
use crate::state::settings::{
    IntegrationPatch, NotificationPatch, PreferencePatch, SecurityPatch, SettingsState,
};

const LANGUAGES: [&str; 4] = ["en", "de", "fr", "es"];
const TIMEZONES: [&str; 4] = ["UTC", "America/New_York", "Europe/Berlin", "Asia/Tokyo"];
const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];

/// Notice text for an integration toggle.
fn integration_notice(name: &str, enabled: bool) -> String {
    let verb = if enabled { "enabled" } else { "disabled" };
    format!("{name} integration has been {verb}.")
}

/// The five settings tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Notifications,
    Security,
    Preferences,
    Integrations,
    Account,
}

/// Settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let tab = RwSignal::new(Tab::default());
    let notice = RwSignal::new(String::new());

    view! {
        <Title text="Settings - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"Settings"</h1>
                        <p class="page__subtitle">
                            "Manage your account preferences and system configuration"
                        </p>
                    </div>
                </header>

                <div class="tab-row">
                    {[
                        (Tab::Notifications, "Notifications"),
                        (Tab::Security, "Security"),
                        (Tab::Preferences, "Preferences"),
                        (Tab::Integrations, "Integrations"),
                        (Tab::Account, "Account"),
                    ]
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <button
                                    class="btn tab-row__tab"
                                    class:btn--primary=move || tab.get() == value
                                    on:click=move |_| tab.set(value)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || !notice.get().is_empty()>
                    <p class="page__notice">{move || notice.get()}</p>
                </Show>

                {move || match tab.get() {
                    Tab::Notifications => view! { <NotificationsTab settings=settings notice=notice/> }.into_any(),
                    Tab::Security => view! { <SecurityTab settings=settings notice=notice/> }.into_any(),
                    Tab::Preferences => view! { <PreferencesTab settings=settings notice=notice/> }.into_any(),
                    Tab::Integrations => view! { <IntegrationsTab settings=settings notice=notice/> }.into_any(),
                    Tab::Account => view! { <AccountTab auth=auth notice=notice/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// A labelled on/off switch row.
#[component]
fn ToggleRow(
    label: &'static str,
    description: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="setting-row">
            <div>
                <span class="setting-row__label">{label}</span>
                <p class="setting-row__description">{description}</p>
            </div>
            <input
                type="checkbox"
                class="setting-row__switch"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </div>
    }
}

#[component]
fn NotificationsTab(settings: RwSignal<SettingsState>, notice: RwSignal<String>) -> impl IntoView {
    let saved = move || notice.set("Notification preferences have been saved.".to_owned());

    view! {
        <section class="card">
            <h2>"Notification Settings"</h2>
            <p class="card__description">"Configure how you receive alerts and updates"</p>
            <ToggleRow
                label="Email Notifications"
                description="Receive vulnerability alerts via email"
                checked=Signal::derive(move || settings.get().notifications.email)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_notifications(NotificationPatch {
                        email: Some(value),
                        ..NotificationPatch::default()
                    }));
                    saved();
                })
            />
            <ToggleRow
                label="Push Notifications"
                description="Browser push alerts for critical findings"
                checked=Signal::derive(move || settings.get().notifications.push)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_notifications(NotificationPatch {
                        push: Some(value),
                        ..NotificationPatch::default()
                    }));
                    saved();
                })
            />
            <ToggleRow
                label="SMS Notifications"
                description="Text messages for urgent incidents"
                checked=Signal::derive(move || settings.get().notifications.sms)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_notifications(NotificationPatch {
                        sms: Some(value),
                        ..NotificationPatch::default()
                    }));
                    saved();
                })
            />
        </section>
    }
}

#[component]
fn SecurityTab(settings: RwSignal<SettingsState>, notice: RwSignal<String>) -> impl IntoView {
    let saved = move || notice.set("Your security preferences have been saved.".to_owned());

    view! {
        <section class="card">
            <h2>"Security Settings"</h2>
            <p class="card__description">"Control session behavior and account protection"</p>
            <ToggleRow
                label="Two-Factor Authentication"
                description="Require a second factor at sign-in"
                checked=Signal::derive(move || settings.get().security.two_factor_auth)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_security(SecurityPatch {
                        two_factor_auth: Some(value),
                        ..SecurityPatch::default()
                    }));
                    saved();
                })
            />
            <div class="setting-row">
                <div>
                    <span class="setting-row__label">"Session Timeout (minutes)"</span>
                    <p class="setting-row__description">"Idle time before automatic sign-out"</p>
                </div>
                <input
                    type="number"
                    class="setting-row__number"
                    prop:value=move || settings.get().security.session_timeout.to_string()
                    on:change=move |ev| {
                        if let Ok(minutes) = event_target_value(&ev).parse::<i64>() {
                            settings.update(|s| s.update_security(SecurityPatch {
                                session_timeout: Some(minutes),
                                ..SecurityPatch::default()
                            }));
                            saved();
                        }
                    }
                />
            </div>
            <div class="setting-row">
                <div>
                    <span class="setting-row__label">"Password Expiry (days)"</span>
                    <p class="setting-row__description">"How often passwords must be rotated"</p>
                </div>
                <input
                    type="number"
                    class="setting-row__number"
                    prop:value=move || settings.get().security.password_expiry.to_string()
                    on:change=move |ev| {
                        if let Ok(days) = event_target_value(&ev).parse::<i64>() {
                            settings.update(|s| s.update_security(SecurityPatch {
                                password_expiry: Some(days),
                                ..SecurityPatch::default()
                            }));
                            saved();
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn PreferencesTab(settings: RwSignal<SettingsState>, notice: RwSignal<String>) -> impl IntoView {
    let saved = move || notice.set("Your preferences have been saved.".to_owned());

    view! {
        <section class="card">
            <h2>"Preferences"</h2>
            <p class="card__description">"Language, timezone, and display formats"</p>
            <div class="setting-row">
                <span class="setting-row__label">"Language"</span>
                <select
                    class="setting-row__select"
                    prop:value=move || settings.get().preferences.language
                    on:change=move |ev| {
                        settings.update(|s| s.update_preferences(PreferencePatch {
                            language: Some(event_target_value(&ev)),
                            ..PreferencePatch::default()
                        }));
                        saved();
                    }
                >
                    {LANGUAGES
                        .into_iter()
                        .map(|l| view! { <option value=l>{l}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="setting-row">
                <span class="setting-row__label">"Timezone"</span>
                <select
                    class="setting-row__select"
                    prop:value=move || settings.get().preferences.timezone
                    on:change=move |ev| {
                        settings.update(|s| s.update_preferences(PreferencePatch {
                            timezone: Some(event_target_value(&ev)),
                            ..PreferencePatch::default()
                        }));
                        saved();
                    }
                >
                    {TIMEZONES
                        .into_iter()
                        .map(|tz| view! { <option value=tz>{tz}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="setting-row">
                <span class="setting-row__label">"Date Format"</span>
                <select
                    class="setting-row__select"
                    prop:value=move || settings.get().preferences.date_format
                    on:change=move |ev| {
                        settings.update(|s| s.update_preferences(PreferencePatch {
                            date_format: Some(event_target_value(&ev)),
                            ..PreferencePatch::default()
                        }));
                        saved();
                    }
                >
                    {DATE_FORMATS
                        .into_iter()
                        .map(|f| view! { <option value=f>{f}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </section>
    }
}

#[component]
fn IntegrationsTab(settings: RwSignal<SettingsState>, notice: RwSignal<String>) -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Integrations"</h2>
            <p class="card__description">"Connect SHERPA to the tools your team already uses"</p>
            <ToggleRow
                label="Slack"
                description="Post vulnerability alerts to a Slack channel"
                checked=Signal::derive(move || settings.get().integrations.slack)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_integrations(IntegrationPatch {
                        slack: Some(value),
                        ..IntegrationPatch::default()
                    }));
                    notice.set(integration_notice("Slack", value));
                })
            />
            <ToggleRow
                label="Jira"
                description="Create Jira issues from findings"
                checked=Signal::derive(move || settings.get().integrations.jira)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_integrations(IntegrationPatch {
                        jira: Some(value),
                        ..IntegrationPatch::default()
                    }));
                    notice.set(integration_notice("Jira", value));
                })
            />
            <ToggleRow
                label="GitHub"
                description="Link findings to repositories and pull requests"
                checked=Signal::derive(move || settings.get().integrations.github)
                on_toggle=Callback::new(move |value| {
                    settings.update(|s| s.update_integrations(IntegrationPatch {
                        github: Some(value),
                        ..IntegrationPatch::default()
                    }));
                    notice.set(integration_notice("GitHub", value));
                })
            />
        </section>
    }
}

#[component]
fn AccountTab(auth: RwSignal<AuthState>, notice: RwSignal<String>) -> impl IntoView {
    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || auth.get().user.map(|u| u.role).unwrap_or_default();

    let on_stub = move |_| notice.set(NOT_IMPLEMENTED_NOTICE.to_owned());

    view! {
        <section class="card">
            <h2>"Account"</h2>
            <p class="card__description">"Profile details and data management"</p>
            <dl class="dialog__fields">
                <dt>"Username"</dt>
                <dd>{username}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <div class="account-actions">
                <button class="btn" on:click=on_stub>
                    "Save Profile"
                </button>
                <button class="btn" on:click=on_stub>
                    "Export Data"
                </button>
                <button class="btn" on:click=on_stub>
                    "Reset Settings"
                </button>
            </div>
        </section>
    }
}
