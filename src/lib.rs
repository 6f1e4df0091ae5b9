//! # chatter-client
//!
//! Leptos + WASM client for the Chatter bot conversation view. Renders the
//! message list, typing indicator, and input footer, and keeps them in sync
//! with the bot server over a persistent websocket.
//!
//! This crate contains the view components, application state, the wire
//! event schema, and the websocket client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and logging, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
