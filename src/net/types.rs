//! Shared wire-protocol DTOs for the chat socket.
//!
//! DESIGN
//! ======
//! Events travel as JSON envelopes of the form `{"event": …, "data": …}`,
//! mirroring the bot server's event names so serde round-trips stay
//! lossless and dispatch code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Events the bot server pushes to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A bot reply; the payload is the raw message text.
    BotMessage(String),
    /// The bot started composing a reply. No payload.
    BotTyping,
    /// The server acknowledged the connection. No payload.
    Connect,
}

/// Events the client emits to the bot server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// A message authored by the local user; the payload is the raw draft
    /// text, unmodified.
    UserMessage(String),
}
