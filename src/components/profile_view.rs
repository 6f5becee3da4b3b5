//! Middle column: the signed-in user's profile.

#[cfg(test)]
#[path = "profile_view_test.rs"]
mod profile_view_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionState;

/// Label/value pairs shown in the profile table.
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("User name", format!("@{}", user.user_name)),
        ("First name", user.first_name.clone()),
        ("Last name", user.last_name.clone()),
        ("Email", user.email.clone()),
        ("User ID", user.id.clone()),
    ]
}

#[component]
pub fn ProfileView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let rows = move || session.with(|s| s.user().map(profile_rows).unwrap_or_default());

    view! {
        <section class="profile-view">
            <h2>{move || session.with(SessionState::display_name)}</h2>
            <dl class="profile-view__fields">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
        </section>
    }
}
