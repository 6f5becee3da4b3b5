//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::{JoinForm, validate_join};
use crate::routing;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::storage::LocalStorage;

#[component]
pub fn JoinPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<ClientConfig>();
    let form = RwSignal::new(JoinForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let sign_in_href = config.href("/signin");

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
        let request = match form.with(validate_join) {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::join(&config, &request).await {
                    Ok(data) => session.update(|s| s.set_session(data, &LocalStorage)),
                    Err(e) => {
                        log::warn!("join failed: {e}");
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
                <h1>"Join"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="User name"
                        prop:value=move || form.with(|f| f.user_name.clone())
                        on:input=move |ev| form.update(|f| f.user_name = event_target_value(&ev))
                    />
                    <div class="auth-form__row">
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="First name"
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Last name"
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                    </div>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=sign_in_href.clone()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
