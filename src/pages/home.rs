//! Landing page with sign-in and join entry points.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::routing::{self, HOME};
use crate::state::session::SessionState;

/// Home page. Routes flagged `check_signed_in` offer a shortcut into the
/// main area when a session is already present.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let check_signed_in = routing::find_by_name(HOME).is_some_and(|r| r.meta.check_signed_in);

    let main_href = config.href("/main");
    let sign_in_href = config.href("/signin");
    let join_href = config.href("/join");

    view! {
        <div class="home-page">
            <h1>"Chat"</h1>
            <p class="home-page__subtitle">"Private conversations with the people you know."</p>
            <Show
                when=move || check_signed_in && session.with(SessionState::is_authenticated)
                fallback=move || {
                    view! {
                        <div class="home-page__actions">
                            <a href=sign_in_href.clone() class="home-button">"Sign in"</a>
                            <a href=join_href.clone() class="home-button home-button--secondary">"Join"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <a href=main_href.clone() class="home-button">"Continue to messages"</a>
                </div>
            </Show>
        </div>
    }
}
