//! Networking modules for the websocket event protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the shared wire schema; `socket_client` manages the
//! websocket lifecycle and dispatches inbound events into chat state.

pub mod socket_client;
pub mod types;
