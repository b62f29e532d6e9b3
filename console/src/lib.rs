//! # console-ui
//!
//! Leptos + WASM frontend for the marketing campaign console.
//!
//! This crate contains the application shell, route-level pages, reusable
//! components, page state machines, the campaign data collaborator, and
//! browser utilities (theme, print, formatting). The `hydrate` feature builds
//! the browser bundle; `ssr` is enabled by the host binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("console logging ready");
    }
    leptos::mount::hydrate_body(app::App);
}
