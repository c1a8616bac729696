//! Top navigation bar with brand, theme toggle, and session actions.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::nav::use_goto;
use crate::util::theme;

/// Fixed top bar. Offers login when anonymous; settings and logout when
/// authenticated. Gating here is presentational only — routes themselves are
/// not guarded.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let goto = use_goto();

    let on_brand = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        goto.set(Some("/".to_owned()));
    };

    let on_toggle_theme = move |_| {
        let current = ui.get().dark_mode;
        let next = theme::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    let on_settings = move |_| goto.set(Some("/settings".to_owned()));
    let on_login = move |_| goto.set(Some("/login".to_owned()));
    let on_logout = move |_| {
        auth.update(AuthState::logout);
        goto.set(Some("/".to_owned()));
    };

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand" on:click=on_brand>
                "SHERPA"
            </a>

            <span class="navbar__spacer"></span>

            <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show
                when=move || auth.get().is_authenticated
                fallback=move || {
                    view! {
                        <button class="btn btn--primary navbar__login" on:click=on_login>
                            "Login"
                        </button>
                    }
                }
            >
                <button class="btn navbar__settings" on:click=on_settings title="Settings">
                    "Settings"
                </button>
                <span class="navbar__user">{username}</span>
                <button class="btn navbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
