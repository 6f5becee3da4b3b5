//! Email + password sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::validate_sign_in;
use crate::routing;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::storage::LocalStorage;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let join_href = config.href("/join");

    // Leave once a session exists, whether just issued or restored.
    let navigate = use_navigate();
    let main_path = routing::named_path(routing::MAIN);
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            navigate(&main_path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_in(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&config, &request).await {
                    Ok(data) => session.update(|s| s.set_session(data, &LocalStorage)),
                    Err(e) => {
                        log::warn!("sign-in failed: {e}");
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &config);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=join_href.clone()>"Join"</a>
                </p>
            </div>
        </div>
    }
}
