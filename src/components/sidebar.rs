//! Side navigation listing the authenticated dashboard views.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::use_goto;

/// The six in-app views, in sidebar order.
const SIDEBAR_ITEMS: [(&str, &str); 6] = [
    ("Dashboard", "/dashboard"),
    ("Feed Vulnerability", "/feed-vulnerability"),
    ("AI Project Management", "/ai-project-management"),
    ("Conversational AI", "/conversational-ai"),
    ("Intelligent Research", "/intelligent-research"),
    ("Settings", "/settings"),
];

/// Fixed left rail. Highlights the active route.
#[component]
pub fn Sidebar() -> impl IntoView {
    let goto = use_goto();
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"SHERPA AI"</div>
            <nav class="sidebar__nav">
                {SIDEBAR_ITEMS
                    .into_iter()
                    .map(|(title, href)| {
                        let pathname = location.pathname;
                        let is_active = move || pathname.get() == href;
                        view! {
                            <a
                                href=href
                                class="sidebar__item"
                                class:sidebar__item--active=is_active
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    goto.set(Some(href.to_owned()));
                                }
                            >
                                {title}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
