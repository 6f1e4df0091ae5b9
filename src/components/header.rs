//! Conversation header with the bot name and connection status.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::chat::{ChatState, ConnectionStatus};

fn connection_status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "Offline",
        ConnectionStatus::Connecting => "Connecting…",
        ConnectionStatus::Connected => "Online",
    }
}

fn connection_status_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "messages__status messages__status--offline",
        ConnectionStatus::Connecting => "messages__status messages__status--connecting",
        ConnectionStatus::Connected => "messages__status messages__status--online",
    }
}

/// Header bar above the message list.
#[component]
pub fn Header() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let label = move || connection_status_label(chat.get().connection_status);
    let class = move || connection_status_class(chat.get().connection_status);

    view! {
        <div class="messages__header">
            <div class="messages__title">"Botty"</div>
            <div class=class>{label}</div>
        </div>
    }
}
