//! # shopwise-client
//!
//! Leptos + WASM frontend for the Shopwise shopping assistant.
//!
//! This crate contains the page, components, view state, and the REST client
//! for the external assistant backend. All reasoning and product lookup
//! happen in that backend; this crate only issues requests and renders
//! results.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }

    let config = config::ClientConfig::from_document();
    log::info!("hydrating with backend {}", config.backend_url());
    leptos::mount::hydrate_body(move || view! { <App config/> });
}
