//! Client-side navigation without a page reload.
//!
//! State is memory-only, so navigation must stay inside the router: a full
//! page load would reset every store. Event handlers write the target path
//! into the returned signal and a single effect, which owns the router's
//! navigate function, performs the route change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Returns a signal that triggers a client-side route change when set.
/// Must be called inside a component under the `Router`.
pub fn use_goto() -> RwSignal<Option<String>> {
    let goto = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = goto.get() {
            goto.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    goto
}
