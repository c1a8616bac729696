//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! The five domain stores (plus UI chrome state) are owned here and provided
//! to the tree as `RwSignal` contexts, so every page reads and mutates state
//! through an explicit handle rather than ambient globals. State is
//! process-memory only and resets on reload.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ConversationalAiPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::feed::FeedVulnerabilityPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::research::ResearchPage;
use crate::pages::settings::SettingsPage;
use crate::state::ai::AiState;
use crate::state::auth::AuthState;
use crate::state::projects::ProjectsState;
use crate::state::settings::SettingsState;
use crate::state::ui::UiState;
use crate::state::vulnerabilities::VulnerabilitiesState;
use crate::util::theme;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Authentication gates navigation offers only; no route is blocked here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark_mode = theme::read_preference();
    theme::apply(dark_mode);

    let auth = RwSignal::new(AuthState::default());
    let vulnerabilities = RwSignal::new(VulnerabilitiesState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let ai = RwSignal::new(AiState::default());
    let settings = RwSignal::new(SettingsState::default());
    let ui = RwSignal::new(UiState { dark_mode });

    provide_context(auth);
    provide_context(vulnerabilities);
    provide_context(projects);
    provide_context(ai);
    provide_context(settings);
    provide_context(ui);

    view! {
        <Title text="SHERPA - AI-Powered Vulnerability Management Platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("feed-vulnerability") view=FeedVulnerabilityPage/>
                <Route path=StaticSegment("ai-project-management") view=ProjectsPage/>
                <Route path=StaticSegment("conversational-ai") view=ConversationalAiPage/>
                <Route path=StaticSegment("intelligent-research") view=ResearchPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
