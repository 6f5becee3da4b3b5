//! Middle column: a one-to-one conversation.
//!
//! Message transport lives elsewhere; this view renders the conversation
//! chrome for the `userId` route param.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn PrivateMessage(user_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let own = user_id.clone();
    let is_self = move || session.with(|s| !own.is_empty() && s.user_id() == own);
    let title = format!("Conversation with {user_id}");

    view! {
        <section class="private-message">
            <header class="private-message__header">
                <h2>{title}</h2>
                <Show when=is_self>
                    <span class="private-message__badge">"Notes to self"</span>
                </Show>
            </header>
            <ol class="private-message__list">
                <li class="private-message__empty">"No messages yet."</li>
            </ol>
        </section>
    }
}
