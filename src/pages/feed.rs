//! Vulnerability intake form: the creation path for the dashboard list.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::vulnerabilities::{Severity, VulnStatus, VulnerabilitiesState, VulnerabilityDraft};
use crate::util::time;

/// Validate the form fields into a draft. New records always start `Open`.
fn build_draft(
    name: &str,
    description: &str,
    severity_value: &str,
    assignee: &str,
    date_found: &str,
) -> Result<VulnerabilityDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a vulnerability name.");
    }
    let description = description.trim();
    if description.is_empty() {
        return Err("Enter a description.");
    }
    let severity = Severity::parse(severity_value).ok_or("Select a severity.")?;
    Ok(VulnerabilityDraft {
        name: name.to_owned(),
        description: description.to_owned(),
        severity,
        status: VulnStatus::Open,
        assignee: assignee.trim().to_owned(),
        date_found: date_found.to_owned(),
    })
}

/// Feed page: report a new vulnerability into the store.
#[component]
pub fn FeedVulnerabilityPage() -> impl IntoView {
    let vulns = expect_context::<RwSignal<VulnerabilitiesState>>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let severity = RwSignal::new("Medium".to_owned());
    let assignee = RwSignal::new(String::new());
    let date_found = RwSignal::new(time::today());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_draft(
            &name.get(),
            &description.get(),
            &severity.get(),
            &assignee.get(),
            &date_found.get(),
        ) {
            Ok(draft) => {
                let reported = draft.name.clone();
                vulns.update(|state| {
                    state.add(draft);
                });
                info.set(format!("Vulnerability \"{reported}\" has been reported."));
                name.set(String::new());
                description.set(String::new());
                severity.set("Medium".to_owned());
                assignee.set(String::new());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <Title text="Feed Vulnerability - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"Feed Vulnerability"</h1>
                        <p class="page__subtitle">"Report a new security finding for tracking"</p>
                    </div>
                </header>

                <section class="card feed-form">
                    <form on:submit=on_submit>
                        <label class="feed-form__label">
                            "Name"
                            <input
                                class="feed-form__input"
                                type="text"
                                placeholder="e.g. SQL Injection in Search Endpoint"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="feed-form__label">
                            "Description"
                            <textarea
                                class="feed-form__input feed-form__textarea"
                                placeholder="What was found, and where?"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="feed-form__label">
                            "Severity"
                            <select
                                class="feed-form__input"
                                prop:value=move || severity.get()
                                on:change=move |ev| severity.set(event_target_value(&ev))
                            >
                                {Severity::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="feed-form__label">
                            "Assignee"
                            <input
                                class="feed-form__input"
                                type="text"
                                placeholder="Who should triage this?"
                                prop:value=move || assignee.get()
                                on:input=move |ev| assignee.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="feed-form__label">
                            "Date Found"
                            <input
                                class="feed-form__input"
                                type="date"
                                prop:value=move || date_found.get()
                                on:input=move |ev| date_found.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Report Vulnerability"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="feed-form__info">{move || info.get()}</p>
                    </Show>
                </section>
            </main>
        </div>
    }
}
