//! Login page backed by the demo credential check.
//!
//! The comparison against the fixed demo credentials happens here, not in the
//! auth store; the store only records the outcome. This is a mock boundary:
//! no hashing, no token, no lockout.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
#[cfg(any(test, feature = "csr"))]
use crate::state::auth::UserProfile;
use crate::util::nav::use_goto;

#[cfg(any(test, feature = "csr"))]
const INVALID_CREDENTIALS_NOTICE: &str = "Invalid credentials. Use admin/password123";

/// Check a username/password pair against the demo credentials, yielding the
/// profile a successful login records.
#[cfg(any(test, feature = "csr"))]
fn check_credentials(username: &str, password: &str) -> Option<UserProfile> {
    if username == "admin" && password == "password123" {
        Some(UserProfile {
            id: 1,
            username: "admin".to_owned(),
            email: "admin@sherpa.ai".to_owned(),
            role: "Administrator".to_owned(),
        })
    } else {
        None
    }
}

/// Login page with the demo credential hint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let goto = use_goto();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                // Simulated API latency, as the product ships it.
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                match check_credentials(username.get_untracked().trim(), &password.get_untracked()) {
                    Some(profile) => {
                        auth.update(|a| a.login(profile));
                        goto.set(Some("/dashboard".to_owned()));
                    }
                    None => {
                        log::warn!("rejected login attempt");
                        info.set(INVALID_CREDENTIALS_NOTICE.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, &goto);
            busy.set(false);
        }
    };

    view! {
        <Title text="Login - SHERPA AI Vulnerability Management"/>
        <div class="login-page">
            <Navbar/>
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your SHERPA account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <div class="login-form__password-row">
                            <input
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="btn login-form__reveal"
                                type="button"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-demo">
                    <p>"Demo Credentials:"</p>
                    <p class="login-demo__mono">"Username: admin"</p>
                    <p class="login-demo__mono">"Password: password123"</p>
                </div>
            </div>
        </div>
    }
}
