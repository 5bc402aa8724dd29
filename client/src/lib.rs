//! # auth-client
//!
//! Leptos + WASM frontend for the account login and password-reset pages.
//!
//! This crate contains pages, shared form state, network types, and the REST
//! helpers that talk to the remote auth service. It is rendered on the server
//! by `auth-server` (feature `ssr`) and hydrated in the browser (feature
//! `hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
