//! Public marketing page with hero, feature grid, and login call-to-action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::util::nav::use_goto;

/// Marketing feature cards shown below the hero.
const FEATURES: [(&str, &str); 6] = [
    (
        "Advanced Vulnerability Detection",
        "AI-powered scanning that identifies security weaknesses before attackers do.",
    ),
    (
        "Intelligent AI Assistant",
        "Conversational analysis of findings, reports, and remediation guidance.",
    ),
    (
        "Automated Workflows",
        "Remediation projects that organize themselves around your riskiest assets.",
    ),
    (
        "Enterprise Security",
        "Role-aware dashboards built for security teams of any size.",
    ),
    (
        "Team Collaboration",
        "Shared projects, assignees, and progress tracking in one place.",
    ),
    (
        "Analytics & Insights",
        "Trend analysis and curated threat intelligence, refreshed continuously.",
    ),
];

/// Landing page. Reachable whether or not a session exists.
#[component]
pub fn LandingPage() -> impl IntoView {
    let goto = use_goto();

    let on_get_started = move |_| goto.set(Some("/login".to_owned()));
    let on_view_dashboard = move |_| goto.set(Some("/dashboard".to_owned()));

    view! {
        <Title text="SHERPA - AI-Powered Vulnerability Management Platform"/>
        <div class="landing-page">
            <Navbar/>

            <section class="landing-hero">
                <span class="landing-hero__eyebrow">"AI-Powered Security Platform"</span>
                <h1 class="landing-hero__title">
                    "Secure Your Digital Future with " <span class="landing-hero__accent">"SHERPA"</span>
                </h1>
                <p class="landing-hero__subtitle">
                    "Vulnerability management guided by AI: detect, prioritize, and remediate
                    security issues across your entire infrastructure."
                </p>
                <div class="landing-hero__actions">
                    <button class="btn btn--primary landing-hero__cta" on:click=on_get_started>
                        "Get Started"
                    </button>
                    <button class="btn landing-hero__secondary" on:click=on_view_dashboard>
                        "View Dashboard"
                    </button>
                </div>
            </section>

            <section class="landing-features">
                <h2 class="landing-features__title">"Everything your security team needs"</h2>
                <div class="landing-features__grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="landing-features__card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
