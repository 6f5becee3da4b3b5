//! Global pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside `<Router>` so every location change, including the
//! first one, passes through [`crate::routing::before_each`]. The
//! authenticated flag is "a token is present in persisted storage", not the
//! in-memory session, so a tab whose store was `reset` keeps its access.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::routing::{self, Navigation};
use crate::state::session::has_persisted_token;
use crate::storage::{KeyValueStore, LocalStorage};

/// Decide whether the app-relative `path` may be shown.
pub fn guard_decision(path: &str, store: &impl KeyValueStore) -> Navigation {
    let target = routing::resolve(path);
    routing::before_each(&target, has_persisted_token(store))
}

/// App-relative path to hand `navigate` for a redirect decision.
///
/// Never carries the base path: the router prepends it.
pub fn redirect_target(decision: Navigation) -> Option<String> {
    match decision {
        Navigation::Proceed => None,
        Navigation::Redirect(name) => Some(routing::named_path(name)),
    }
}

/// Replace the current location whenever the guard rejects it.
pub fn install_route_guard<F>(pathname: Memo<String>, config: ClientConfig, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let full = pathname.get();
        let path = routing::strip_base(&full, &config.base_path);
        if let Some(target) = redirect_target(guard_decision(path, &LocalStorage)) {
            log::debug!("guard redirect {full} -> {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Renders nothing; installs the guard for the enclosing router.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    install_route_guard(location.pathname, config, use_navigate());
}
