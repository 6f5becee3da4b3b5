//! Three-column layout shared by every authenticated route.
//!
//! DESIGN
//! ======
//! The slot contents are not hard-wired here: the current location is
//! resolved through [`crate::routing`] and each slot renders whatever view the
//! matched route binds to it. Adding a main-area route only touches the table.
//!
//! Nothing is rendered until [`shell_admits`] passes for the current route.
//! The check runs in an Effect, so the server and the first client frame both
//! render the empty shell and `RouteGuard` redirects before any slot mounts.

#[cfg(test)]
#[path = "main_shell_test.rs"]
mod main_shell_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::default_view::DefaultView;
use crate::components::message_prompt::MessagePrompt;
use crate::components::private_message::PrivateMessage;
use crate::components::profile_view::ProfileView;
use crate::components::right_side::RightSide;
use crate::components::user_search::UserSearch;
use crate::config::ClientConfig;
use crate::routing::{self, Navigation, RouteMatch, Slot, View};
use crate::state::session::has_persisted_token;
use crate::storage::{KeyValueStore, LocalStorage};

/// Whether the shell may render its slots for `matched`.
pub fn shell_admits(matched: &RouteMatch, store: &impl KeyValueStore) -> bool {
    matched.route.is_shell() && routing::before_each(matched, has_persisted_token(store)) == Navigation::Proceed
}

#[component]
pub fn MainShell() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    let matched = Memo::new(move |_| {
        let full = location.pathname.get();
        routing::resolve(routing::strip_base(&full, &config.base_path))
    });

    let admitted = RwSignal::new(false);
    Effect::new(move || {
        admitted.set(matched.with(|m| shell_admits(m, &LocalStorage)));
    });

    view! {
        <div class="main-shell">
            <Show when=move || admitted.get()>
                <div class="main-shell__left">{move || matched.with(|m| render_slot(m, Slot::Left))}</div>
                <main class="main-shell__middle">{move || matched.with(|m| render_slot(m, Slot::Middle))}</main>
                <div class="main-shell__right">{move || matched.with(|m| render_slot(m, Slot::Right))}</div>
            </Show>
        </div>
    }
}

/// Render the view `matched` binds to `slot`, or nothing.
fn render_slot(matched: &RouteMatch, slot: Slot) -> AnyView {
    let Some(view) = matched.route.view(slot) else {
        return ().into_any();
    };
    match view {
        // Single-view pages only bind `Slot::Default` and `App` mounts them directly.
        View::Home | View::SignIn | View::Join => ().into_any(),
        View::MessagePrompt => view! { <MessagePrompt/> }.into_any(),
        View::DefaultView => view! { <DefaultView/> }.into_any(),
        View::Profile => view! { <ProfileView/> }.into_any(),
        View::UserSearch => view! { <UserSearch/> }.into_any(),
        View::RightSide => view! { <RightSide/> }.into_any(),
        View::PrivateMessage => {
            let user_id = if matched.route.props && slot == Slot::Middle {
                matched.param("userId").unwrap_or_default().to_owned()
            } else {
                String::new()
            };
            view! { <PrivateMessage user_id=user_id/> }.into_any()
        }
    }
}
