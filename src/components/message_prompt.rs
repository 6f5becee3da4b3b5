//! Left column: greeting and main-area navigation.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::SessionState;

const LINKS: [(&str, &str); 3] = [("Messages", "/main"), ("Find people", "/main/search"), ("Profile", "/main/profile")];

#[component]
pub fn MessagePrompt() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session.with(|s| match s.user() {
            Some(user) if !user.first_name.trim().is_empty() => format!("Hi, {}", user.first_name.trim()),
            _ => "Hi there".to_owned(),
        })
    };

    view! {
        <nav class="message-prompt">
            <p class="message-prompt__greeting">{greeting}</p>
            <ul class="message-prompt__links">
                {LINKS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <li>
                                <a href=config.href(path)>{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
