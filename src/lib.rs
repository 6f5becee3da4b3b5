//! # chat-client
//!
//! Leptos + WASM frontend shell for the chat application: the route table
//! with its authentication guard, and the session store persisted to
//! browser `localStorage`.
//!
//! Everything outside `app`, `pages`, and `components` is plain Rust and is
//! unit-tested natively; browser access is confined to the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let loaded = config::ClientConfig::from_build_env();
    let level = loaded.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
