//! # practice-client
//!
//! Leptos + WASM frontend for the coding-practice platform.
//!
//! This crate contains pages, components, application state, form records,
//! and the REST client. Problem records and the list-view sort/view state
//! come from the `problemset` crate.
//!
//! Build for the browser with the `csr` feature (for example via `trunk`).
//! Without it, browser APIs compile to stubs so the crate unit-tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::client_config();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("starting client against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
