//! Static client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only configurable value is the bot server endpoint; it is baked in at
//! build time so the deployed bundle needs no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default bot server websocket endpoint for local development.
pub const DEFAULT_BOT_SERVER_ENDPOINT: &str = "ws://localhost:4000/chat";

/// Websocket endpoint of the bot server.
///
/// Read from the `BOT_SERVER_ENDPOINT` build environment variable, falling
/// back to the local development default.
pub fn bot_server_endpoint() -> String {
    option_env!("BOT_SERVER_ENDPOINT")
        .unwrap_or(DEFAULT_BOT_SERVER_ENDPOINT)
        .to_owned()
}
