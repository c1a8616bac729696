//! Intelligent research: curated database, threat intel, and AI analysis.
//!
//! All three tabs read static datasets; only the research tab filters. The
//! list recomputes reactively on every keystroke, and the Search button adds
//! a result-count notice on top.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::research::{
    RESEARCH_CATEGORIES, analysis_insights, research_database, threat_intelligence, trend_rows,
};
use crate::state::vulnerabilities::Severity;
use crate::util::filter::filter_research;

/// CSS modifier for a severity badge on research cards.
fn severity_badge_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "badge--critical",
        Severity::High => "badge--high",
        Severity::Medium => "badge--medium",
        Severity::Low => "badge--low",
    }
}

/// The three research tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Research,
    Intelligence,
    Analysis,
}

/// Intelligent research page.
#[component]
pub fn ResearchPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::default());

    view! {
        <Title text="Intelligent Research - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"Intelligent Research"</h1>
                        <p class="page__subtitle">
                            "AI-powered security research and threat intelligence"
                        </p>
                    </div>
                </header>

                <div class="tab-row">
                    {[
                        (Tab::Research, "Security Research"),
                        (Tab::Intelligence, "Threat Intelligence"),
                        (Tab::Analysis, "AI Analysis"),
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

                {move || match tab.get() {
                    Tab::Research => view! { <ResearchTab/> }.into_any(),
                    Tab::Intelligence => view! { <IntelligenceTab/> }.into_any(),
                    Tab::Analysis => view! { <AnalysisTab/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Searchable research database tab.
#[component]
fn ResearchTab() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(None::<&'static str>);
    let notice = RwSignal::new(String::new());

    let filtered = move || {
        let items = research_database();
        filter_research(&items, query.get().trim(), category.get())
    };

    let on_search = move |_| {
        let found = filtered().len();
        notice.set(format!("Found {found} items matching your criteria."));
    };

    let on_view = move |url: String| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    };

    let on_save = move |title: String| {
        notice.set(format!("\"{title}\" has been saved to your personal research library."));
    };

    view! {
        <section class="card">
            <h2>"Research Database"</h2>
            <p class="card__description">
                "Search through curated security research and vulnerability data"
            </p>

            <div class="filter-row">
                <input
                    class="filter-row__search"
                    type="text"
                    placeholder="Search research papers, CVEs, threat reports..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_search>
                    "Search"
                </button>
            </div>

            <div class="filter-row__buttons">
                <button
                    class="btn filter-row__button"
                    class:btn--primary=move || category.get().is_none()
                    on:click=move |_| category.set(None)
                >
                    "All"
                </button>
                {RESEARCH_CATEGORIES
                    .into_iter()
                    .map(|name| {
                        view! {
                            <button
                                class="btn filter-row__button"
                                class:btn--primary=move || category.get() == Some(name)
                                on:click=move |_| category.set(Some(name))
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || !notice.get().is_empty()>
                <p class="page__notice">{move || notice.get()}</p>
            </Show>

            <div class="research-list">
                {move || {
                    let items = filtered();
                    if items.is_empty() {
                        return view! {
                            <p class="research-list__empty">
                                "No research found matching your criteria."
                            </p>
                        }
                            .into_any();
                    }
                    items
                        .into_iter()
                        .map(|item| {
                            let view_url = item.url.clone();
                            let save_title = item.title.clone();
                            view! {
                                <div class="research-list__item">
                                    <div class="research-list__head">
                                        <h3>{item.title.clone()}</h3>
                                        <span class=format!("badge {}", severity_badge_class(item.severity))>
                                            {item.severity.as_str()}
                                        </span>
                                    </div>
                                    <p class="research-list__description">{item.description.clone()}</p>
                                    <div class="research-list__tags">
                                        {item
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="badge badge--outline">{tag.clone()}</span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <div class="research-list__meta">
                                        <span>{format!("Source: {}", item.source)}</span>
                                        <span>{format!("Date: {}", item.date)}</span>
                                        <span>{format!("Category: {}", item.category)}</span>
                                    </div>
                                    <div class="research-list__notes">
                                        <span class="research-list__notes-label">"Patch Risk Notes:"</span>
                                        <p>{item.patch_risk_notes.clone()}</p>
                                    </div>
                                    <div class="research-list__actions">
                                        <button class="btn" on:click=move |_| on_view(view_url.clone())>
                                            "View"
                                        </button>
                                        <button class="btn" on:click=move |_| on_save(save_title.clone())>
                                            "Save"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </section>
    }
}

/// Current threat intelligence tab.
#[component]
fn IntelligenceTab() -> impl IntoView {
    view! {
        <section class="card">
            <h2>"Current Threat Intelligence"</h2>
            <p class="card__description">"Real-time threat intelligence and security alerts"</p>
            <div class="threat-list">
                {threat_intelligence()
                    .into_iter()
                    .map(|threat| {
                        view! {
                            <div class="threat-list__item">
                                <div class="threat-list__head">
                                    <h3>{threat.threat.clone()}</h3>
                                    <span class=format!("badge {}", severity_badge_class(threat.severity))>
                                        {threat.severity.as_str()}
                                    </span>
                                </div>
                                <p>{threat.description.clone()}</p>
                                <p class="threat-list__indicators-label">"Indicators of Compromise:"</p>
                                <ul class="threat-list__indicators">
                                    {threat
                                        .indicators
                                        .iter()
                                        .map(|indicator| view! { <li>{indicator.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// Trend analysis and AI insights tab.
#[component]
fn AnalysisTab() -> impl IntoView {
    let notice = RwSignal::new(String::new());

    let on_map = move |_| {
        notice.set("A real-time global threat map is in development.".to_owned());
    };

    view! {
        <div class="analysis-layout">
            <Show when=move || !notice.get().is_empty()>
                <p class="page__notice">{move || notice.get()}</p>
            </Show>

            <div class="analysis-layout__row">
                <section class="card">
                    <h2>"Trend Analysis"</h2>
                    <div class="trend-list">
                        {trend_rows()
                            .into_iter()
                            .map(|row| {
                                let rising = row.delta_percent >= 0;
                                let arrow = if rising { "↑" } else { "↓" };
                                view! {
                                    <div class="trend-list__item">
                                        <span>{row.label.clone()}</span>
                                        <span class="badge" class:badge--open=rising class:badge--resolved=!rising>
                                            {format!("{arrow} {}%", row.delta_percent.abs())}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="card card--clickable" on:click=on_map>
                    <h2>"Global Threat Map"</h2>
                    <div class="analysis-layout__map">
                        <p>"Interactive threat map visualization"</p>
                        <p class="analysis-layout__map-hint">
                            "Click to view real-time global security events"
                        </p>
                    </div>
                </section>
            </div>

            <section class="card">
                <h2>"AI-Generated Insights"</h2>
                <p class="card__description">
                    "Automated analysis and recommendations based on current threat landscape"
                </p>
                <div class="insight-list">
                    {analysis_insights()
                        .into_iter()
                        .map(|insight| {
                            view! {
                                <div class="insight-list__item">
                                    <span class="dot dot--accent"></span>
                                    <p>{insight}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
