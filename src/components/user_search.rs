//! Middle column: open a private conversation by user id.

#[cfg(test)]
#[path = "user_search_test.rs"]
mod user_search_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing;

/// App path of the conversation with `query`, if it is a usable user id.
pub fn conversation_path(query: &str) -> Option<String> {
    let id = query.trim();
    if id.is_empty() || id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return None;
    }
    routing::path_for("private-message", &[("userId", id)])
}

#[component]
pub fn UserSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let target = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match conversation_path(&query.get()) {
            Some(path) => {
                error.set(None);
                target.set(Some(path));
            }
            None => error.set(Some("Enter a user ID without spaces.")),
        }
    };

    view! {
        <section class="user-search">
            <h2>"Find people"</h2>
            <form class="user-search__form" on:submit=on_submit>
                <input
                    class="user-search__input"
                    type="search"
                    placeholder="User ID"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Open conversation"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="user-search__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
