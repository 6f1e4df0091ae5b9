//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat view while reading/writing shared state from
//! Leptos context providers. `messages` composes the others.

pub mod footer;
pub mod header;
pub mod message_row;
pub mod messages;
pub mod typing_indicator;
