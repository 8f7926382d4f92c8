//! # pantry-ui
//!
//! Leptos + WASM view layer for the pantry tracker.
//!
//! This crate contains the listing page, its components, component-local
//! state, the HTTP access layer for the pantry backend, and client config.
//! The backend itself lives elsewhere and is reached over JSON.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let config = config::ClientConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("pantry-ui hydrating with api base {}", config.api_base);

    leptos::mount::hydrate_body(app::App);
}
