//! Middle column placeholder when no conversation is open.

use leptos::prelude::*;

use crate::config::ClientConfig;

#[component]
pub fn DefaultView() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    view! {
        <section class="default-view">
            <h2>"No conversation selected"</h2>
            <p>"Pick someone from your contacts or "<a href=config.href("/main/search")>"find people"</a>"."</p>
        </section>
    }
}
