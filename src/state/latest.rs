//! Shared latest-message summary, keyed by conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This store is owned by the surrounding application shell and drives the
//! contacts list preview outside the chat view. The chat view only writes
//! into it when a bot message arrives.

#[cfg(test)]
#[path = "latest_test.rs"]
mod latest_test;

use std::collections::HashMap;

use crate::state::chat::Origin;

/// Conversation key for the Botty session.
pub const BOT_CONVERSATION_ID: &str = "botty";

/// The most recent message of one conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatestMessage {
    pub origin: Origin,
    pub text: String,
}

/// Latest message per conversation.
#[derive(Clone, Debug, Default)]
pub struct LatestMessagesState {
    pub latest: HashMap<String, LatestMessage>,
}

impl LatestMessagesState {
    /// Replace the summary for `conversation` with the given message.
    pub fn set_latest_message(&mut self, conversation: &str, origin: Origin, text: &str) {
        self.latest.insert(
            conversation.to_owned(),
            LatestMessage {
                origin,
                text: text.to_owned(),
            },
        );
    }

    pub fn latest_for(&self, conversation: &str) -> Option<&LatestMessage> {
        self.latest.get(conversation)
    }
}
