//! # client
//!
//! Leptos + WASM front end for the account portal: login, registration, a
//! user dashboard, a product list, and an admin user listing. All real work
//! (credential checks, token issuance, roles, persistence) happens in the
//! external REST API; this crate holds the bearer token and renders views.
//!
//! Built with `hydrate` for the browser and `ssr` for the Axum host.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install browser logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
