//! # sitechat-console
//!
//! Leptos + WASM single-page console for managing websites, their embedded
//! chat widgets, content, pages, and the AI assistant configuration.
//!
//! This crate contains pages, components, application state, the auth
//! provider client, and the session-gated application shell. The only real
//! external dependency is the auth provider consulted at startup and on
//! sign-in/sign-up/sign-out; list screens render local mock inventories.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
