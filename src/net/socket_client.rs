//! Websocket client for the bot server connection.
//!
//! The socket client owns the single persistent connection for the session:
//! it forwards outgoing events from the shared sender channel and dispatches
//! inbound events into chat state. It is spawned once from `App`, which is
//! what guarantees exactly one registered handler per inbound event kind.
//!
//! All websocket I/O is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment; event dispatch itself is pure and tested
//! natively.
//!
//! ERROR HANDLING
//! ==============
//! There is no reconnect or backoff: a transport failure is logged, the
//! status flips to `Disconnected`, and the session stays offline. Failures
//! are never surfaced to the user.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ServerEvent;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::chat::{ChatState, SideEffect};
#[cfg(feature = "hydrate")]
use crate::state::chat::ConnectionStatus;
#[cfg(feature = "hydrate")]
use crate::state::latest::LatestMessagesState;

use thiserror::Error;

/// Transport-level failure of the chat socket. Logged, never retried.
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("websocket connect to {url} failed: {reason}")]
    Connect { url: String, reason: String },
    #[error("websocket closed by remote")]
    Closed,
}

/// Apply one inbound server event to the chat state, returning the side
/// effects the caller must perform after the update commits.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn apply_server_event(event: &ServerEvent, chat: &mut ChatState) -> Vec<SideEffect> {
    match event {
        ServerEvent::BotMessage(text) => chat.apply_bot_message(text),
        ServerEvent::BotTyping => chat.apply_bot_typing(),
        ServerEvent::Connect => chat.apply_connected(),
    }
}

/// Spawn the websocket client as a local async task and return the sender
/// for outgoing event JSON.
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client(
    chat: leptos::prelude::RwSignal<ChatState>,
    latest: leptos::prelude::RwSignal<LatestMessagesState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(socket_client_loop(chat, latest, rx));

    tx
}

/// Connect once and run until the socket closes. No reconnect policy.
#[cfg(feature = "hydrate")]
async fn socket_client_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    latest: leptos::prelude::RwSignal<LatestMessagesState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Update;

    let url = crate::config::bot_server_endpoint();

    chat.update(|c| c.connection_status = ConnectionStatus::Connecting);

    match connect_and_run(&url, chat, latest, rx).await {
        Ok(()) => leptos::logging::log!("chat socket closed cleanly"),
        Err(e) => leptos::logging::warn!("chat socket error: {e}"),
    }

    chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
}

/// Open the websocket and process messages until either direction ends.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    latest: leptos::prelude::RwSignal<LatestMessagesState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), SocketError> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| SocketError::Connect {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing event JSON from the shared sender channel.
    let send_task = async {
        use futures::SinkExt;
        while let Some(json) = rx.next().await {
            if ws_write.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch inbound events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(&text) {
                    Ok(event) => handle_server_event(&event, chat, latest),
                    Err(e) => leptos::logging::warn!("unrecognized chat event: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either direction finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Commit the state transition for an inbound event, then run its effects.
#[cfg(feature = "hydrate")]
fn handle_server_event(
    event: &ServerEvent,
    chat: leptos::prelude::RwSignal<ChatState>,
    latest: leptos::prelude::RwSignal<LatestMessagesState>,
) {
    use leptos::prelude::Update;

    let effects = chat
        .try_update(|c| apply_server_event(event, c))
        .unwrap_or_default();
    crate::util::effects::perform(&effects, latest);
}
