//! One message bubble in the conversation list.

#[cfg(test)]
#[path = "message_row_test.rs"]
mod message_row_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, Origin};

/// Row class for a message, given the record that follows it.
///
/// Consecutive same-origin messages collapse their visual chrome: only the
/// last bubble of a run carries the avatar/tail styling.
fn row_class(message: &ChatMessage, next: Option<&ChatMessage>) -> String {
    let who = match message.origin {
        Origin::Me => "me",
        Origin::Bot => "bot",
    };
    let grouped = next.is_some_and(|n| n.origin == message.origin);
    if grouped {
        format!("message message--{who} message--grouped")
    } else {
        format!("message message--{who}")
    }
}

/// A single message row. `next` is the record that follows this one in the
/// store, used for same-origin grouping.
#[component]
pub fn MessageRow(message: ChatMessage, next: Option<ChatMessage>) -> impl IntoView {
    let class = row_class(&message, next.as_ref());

    view! {
        <div class=class id=message.id.clone()>
            <div class="message__bubble">{message.text.clone()}</div>
        </div>
    }
}
