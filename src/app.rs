//! Root application component and shared context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the reactive state for one chat session and the single socket
//! client connected to the bot server. Child components read everything they
//! need from context, so the view tree stays free of plumbing props.

use leptos::prelude::*;

use crate::components::messages::Messages;
use crate::net::types::ClientEvent;
use crate::state::chat::ChatState;
use crate::state::latest::LatestMessagesState;

/// Shared handle for emitting client events on the chat socket.
///
/// Wraps the outbound half of the socket client so components can send
/// without touching websocket state. A default (disconnected) handle drops
/// events, matching the fire-and-forget send contract.
#[derive(Clone, Default)]
pub struct SocketSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl SocketSender {
    #[cfg(feature = "hydrate")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Serialize and emit a client event.
    ///
    /// Returns `false` when there is no active connection or the event cannot
    /// be encoded. Callers do not await delivery and no failure is surfaced.
    pub fn send(&self, event: &ClientEvent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = &self.tx else {
                return false;
            };
            if let Ok(json) = serde_json::to_string(event) {
                tx.unbounded_send(json).is_ok()
            } else {
                false
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// Root application component.
///
/// Provides the chat store, the latest-message summary, and the socket
/// sender as contexts, spawns the socket client, and renders the chat view.
#[component]
pub fn App() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let latest = RwSignal::new(LatestMessagesState::default());
    let sender = RwSignal::new(SocketSender::default());

    provide_context(chat);
    provide_context(latest);
    provide_context(sender);

    // One socket client per process: inbound handlers are registered exactly
    // once, so remounting the view cannot double-append messages.
    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::socket_client::spawn_socket_client(chat, latest);
        sender.set(SocketSender::new(tx));
    }

    view! { <Messages/> }
}
