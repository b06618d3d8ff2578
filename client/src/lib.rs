//! # client
//!
//! Leptos + WASM frontend for the link dashboard's session and access
//! control layer. Binds the platform-independent `session` crate to the
//! browser: `localStorage` token storage, the `/auth/me` resolver, the auth
//! context provider, route guards, and the OAuth callback page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
