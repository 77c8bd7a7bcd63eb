//! # car-admin
//!
//! Leptos + WASM administrative front-end for the cars/categories REST API.
//!
//! This crate contains pages, components, the JWT session layer, the HTTP
//! request pipeline and the resource services that sit on top of it. Browser
//! glue (localStorage, `fetch`, timers) is compiled only with the `csr`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry: install logging and mount [`app::App`] on `<body>`.
///
/// Exported to JS so the bundle can also be started from a custom shell.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    let config = config::AppConfig::from_build_env();
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        log::warn!("console logger already installed: {e}");
    }
    log::info!("car-admin starting; api={}", config.api_base_url);
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config/> });
}
