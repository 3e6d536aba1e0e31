//! # auth-checkpoint
//!
//! Leptos + WASM client for the two-factor login checkpoint. After the
//! password step accepts a login that needs a second factor, this screen
//! collects a device code or recovery code, verifies it against the pending
//! session token, and sends the browser on to the authenticated app.
//!
//! This crate contains the page, its components, the form and flash state,
//! the REST helper for the checkpoint endpoint, and browser navigation
//! helpers. The `hydrate` feature builds the browser bundle; `ssr` builds the
//! server-rendered shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
