//! Security dashboard: vulnerability stats, filterable list, and activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the vulnerability store and re-derives counts and the filtered list
//! on every change. Filtering runs on each keystroke; the store itself is
//! never mutated here (creation lives on the feed page).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::vulnerabilities::{Severity, VulnStatus, VulnerabilitiesState, Vulnerability};
use crate::util::filter::filter_vulnerabilities;
use crate::util::nav::use_goto;

/// Static recent-activity feed shown under the list.
const RECENT_ACTIVITY: [&str; 4] = [
    "SQL Injection vulnerability detected in login form",
    "XSS vulnerability patched in comment section",
    "SSL certificate renewed for main domain",
    "Security scan completed for production environment",
];

/// CSS modifier for a severity dot.
fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "dot--critical",
        Severity::High => "dot--high",
        Severity::Medium => "dot--medium",
        Severity::Low => "dot--low",
    }
}

/// CSS modifier for a status badge.
fn status_class(status: VulnStatus) -> &'static str {
    match status {
        VulnStatus::Open => "badge--open",
        VulnStatus::InProgress => "badge--in-progress",
        VulnStatus::Resolved => "badge--resolved",
    }
}

/// Dashboard page: stat cards, search + severity filter, list, activity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let vulns = expect_context::<RwSignal<VulnerabilitiesState>>();
    let goto = use_goto();

    let search = RwSignal::new(String::new());
    let selected_severity = RwSignal::new(None::<Severity>);
    let details = RwSignal::new(None::<Vulnerability>);

    let filtered = move || {
        let state = vulns.get();
        filter_vulnerabilities(&state.items, search.get().trim(), selected_severity.get())
    };

    let stats = move || {
        let state = vulns.get();
        vec![
            ("Total Vulnerabilities", state.items.len()),
            ("Critical Issues", state.severity_count(Severity::Critical)),
            ("Resolved", state.status_count(VulnStatus::Resolved)),
            ("In Progress", state.status_count(VulnStatus::InProgress)),
        ]
    };

    let on_report = move |_| goto.set(Some("/feed-vulnerability".to_owned()));

    let on_details_close = Callback::new(move |()| details.set(None));

    view! {
        <Title text="Dashboard - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"Security Dashboard"</h1>
                        <p class="page__subtitle">
                            "Monitor and manage your organization's security posture"
                        </p>
                    </div>
                    <button class="btn btn--primary" on:click=on_report>
                        "+ Report Vulnerability"
                    </button>
                </header>

                <div class="stat-grid">
                    {move || {
                        stats()
                            .into_iter()
                            .map(|(title, value)| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__title">{title}</span>
                                        <span class="stat-card__value">{value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <section class="card">
                    <h2>"Vulnerability Management"</h2>
                    <p class="card__description">
                        "Track and manage security vulnerabilities across your infrastructure"
                    </p>

                    <div class="filter-row">
                        <input
                            class="filter-row__search"
                            type="text"
                            placeholder="Search vulnerabilities..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <div class="filter-row__buttons">
                            <button
                                class="btn filter-row__button"
                                class:btn--primary=move || selected_severity.get().is_none()
                                on:click=move |_| selected_severity.set(None)
                            >
                                "All"
                            </button>
                            {Severity::ALL
                                .into_iter()
                                .map(|severity| {
                                    view! {
                                        <button
                                            class="btn filter-row__button"
                                            class:btn--primary=move || {
                                                selected_severity.get() == Some(severity)
                                            }
                                            on:click=move |_| selected_severity.set(Some(severity))
                                        >
                                            {severity.as_str()}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="vuln-list">
                        {move || {
                            let items = filtered();
                            if items.is_empty() {
                                return view! {
                                    <p class="vuln-list__empty">
                                        "No vulnerabilities found matching your criteria."
                                    </p>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .map(|vuln| {
                                    let open_details = vuln.clone();
                                    view! {
                                        <div
                                            class="vuln-list__item"
                                            on:click=move |_| details.set(Some(open_details.clone()))
                                        >
                                            <div class="vuln-list__head">
                                                <span class=format!("dot {}", severity_class(vuln.severity))></span>
                                                <h3>{vuln.name.clone()}</h3>
                                                <span class=format!("badge {}", status_class(vuln.status))>
                                                    {vuln.status.as_str()}
                                                </span>
                                            </div>
                                            <p class="vuln-list__description">{vuln.description.clone()}</p>
                                            <div class="vuln-list__meta">
                                                <span>{format!("Severity: {}", vuln.severity.as_str())}</span>
                                                <span>{format!("Assignee: {}", vuln.assignee)}</span>
                                                <span>{format!("Found: {}", vuln.date_found)}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                </section>

                <section class="card">
                    <h2>"Recent Activity"</h2>
                    <div class="activity-list">
                        {RECENT_ACTIVITY
                            .into_iter()
                            .enumerate()
                            .map(|(index, activity)| {
                                view! {
                                    <div class="activity-list__item">
                                        <span class="dot dot--accent"></span>
                                        <span>{activity}</span>
                                        <span class="activity-list__when">
                                            {format!("{}h ago", index + 1)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
            <Show when=move || details.get().is_some()>
                <VulnerabilityDetailsDialog details=details on_close=on_details_close/>
            </Show>
        </div>
    }
}

/// Read-only dialog for a selected vulnerability.
#[component]
fn VulnerabilityDetailsDialog(
    details: RwSignal<Option<Vulnerability>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                {move || {
                    details
                        .get()
                        .map(|vuln| {
                            view! {
                                <h2>{vuln.name.clone()}</h2>
                                <p class="dialog__description">{vuln.description.clone()}</p>
                                <dl class="dialog__fields">
                                    <dt>"Severity"</dt>
                                    <dd>{vuln.severity.as_str()}</dd>
                                    <dt>"Status"</dt>
                                    <dd>{vuln.status.as_str()}</dd>
                                    <dt>"Assignee"</dt>
                                    <dd>{vuln.assignee.clone()}</dd>
                                    <dt>"Date Found"</dt>
                                    <dd>{vuln.date_found.clone()}</dd>
                                </dl>
                            }
                        })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
