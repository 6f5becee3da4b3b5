//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, join::JoinPage, main_shell::MainShell, sign_in::SignInPage};
use crate::state::session::SessionState;
use crate::storage::LocalStorage;
use crate::util::guard::RouteGuard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and config contexts, restores any persisted session,
/// and mounts the router. Paths mirror [`crate::routing::ROUTES`]; every
/// main-area path renders `MainShell`, which picks slot contents from that
/// table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("using default client config: {e}");
        ClientConfig::default()
    });
    let base = config.router_base().to_owned();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(config);

    // Restore after mount so server and client render the same first frame.
    Effect::new(move || {
        session.update(|s| {
            s.initialize_from_storage(&LocalStorage);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Chat"/>

        <Router base=base>
            <RouteGuard/>
            // One entry per `routing::ROUTES` row, same order; `app_test.rs`
            // holds the mirrored list and fails when the two drift.
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("main") view=MainShell/>
                <Route path=(StaticSegment("main"), StaticSegment("profile")) view=MainShell/>
                <Route path=(StaticSegment("main"), StaticSegment("search")) view=MainShell/>
                <Route path=(StaticSegment("user"), ParamSegment("userId")) view=MainShell/>
                <Route path=StaticSegment("join") view=JoinPage/>
            </Routes>
        </Router>
    }
}
