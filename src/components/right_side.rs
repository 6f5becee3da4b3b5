//! Right column: signed-in identity and logout.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::SessionState;
use crate::storage::LocalStorage;

#[component]
pub fn RightSide() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let home_href = config.href("/");

    let handle = move || {
        session.with(|s| s.user().map(|u| format!("@{}", u.user_name)).unwrap_or_default())
    };

    let on_logout = move |_| {
        session.update(|s| s.logout(&LocalStorage));
        // Full reload so no view keeps stale session data.
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(&home_href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &home_href;
        }
    };

    view! {
        <aside class="right-side">
            <div class="right-side__user">
                <span class="right-side__name">{move || session.with(SessionState::display_name)}</span>
                <span class="right-side__handle">{handle}</span>
            </div>
            <button class="btn right-side__logout" on:click=on_logout>
                "Log out"
            </button>
        </aside>
    }
}
