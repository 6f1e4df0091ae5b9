//! Chat-session state for the active bot conversation.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model is the single source of truth for the message list and the
//! typing indicator. The store is append-only for the lifetime of the view:
//! records are never removed or edited, and insertion order is both display
//! order and chronological order.
//!
//! TRADE-OFFS
//! ==========
//! Transitions mutate the state and return `SideEffect` values instead of
//! playing sounds or touching shared contexts themselves. Keeping the
//! transitions pure makes every property of the session testable natively,
//! at the cost of one extra `perform` call at each call site.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Fixed greeting Botty shows when a fresh conversation view opens.
///
/// Seeded locally on mount; it never travels over the socket.
pub const INITIAL_BOT_MESSAGE: &str =
    "Hi there! I'm Botty. Ask me anything and I'll do my best to help.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The local user.
    Me,
    /// The remote bot counterpart.
    Bot,
}

/// A single chat message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Client-generated UUID, used as the stable rendering key.
    pub id: String,
    /// Author of the message.
    pub origin: Origin,
    /// Raw message text, unmodified.
    pub text: String,
}

impl ChatMessage {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            origin,
            text: text.into(),
        }
    }
}

/// Websocket connection status. Diagnostics only; no chat behavior
/// depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// Websocket handshake is in progress.
    Connecting,
    /// Socket is open and the server sent its `connect` event.
    Connected,
}

/// A side effect requested by a state transition, to be run by the caller
/// after the update commits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Play the send or receive audio cue for the given origin.
    PlaySound(Origin),
    /// Push the newest message into the shared latest-message summary.
    UpdateLatestMessage { origin: Origin, text: String },
}

/// State for one chat session: the message store plus transient flags.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Append-only message store in display order.
    pub messages: Vec<ChatMessage>,
    /// True while the bot is composing a reply.
    pub bot_typing: bool,
    /// Current websocket lifecycle state.
    pub connection_status: ConnectionStatus,
    /// Whether the initial greeting has been seeded into the store.
    pub greeted: bool,
}

impl ChatState {
    /// Append a new record to the end of the store.
    pub fn append(&mut self, origin: Origin, text: impl Into<String>) -> Vec<SideEffect> {
        self.messages.push(ChatMessage::new(origin, text));
        vec![SideEffect::PlaySound(origin)]
    }

    /// A bot reply arrived: the typing row disappears, the message joins the
    /// store, and the latest-message summary is refreshed.
    pub fn apply_bot_message(&mut self, text: &str) -> Vec<SideEffect> {
        self.bot_typing = false;
        let mut effects = self.append(Origin::Bot, text);
        effects.push(SideEffect::UpdateLatestMessage {
            origin: Origin::Bot,
            text: text.to_owned(),
        });
        effects
    }

    /// The bot started composing a reply. The flag stays set until the
    /// reply itself arrives, no matter how many typing signals repeat.
    pub fn apply_bot_typing(&mut self) -> Vec<SideEffect> {
        self.bot_typing = true;
        Vec::new()
    }

    /// The server acknowledged the connection.
    pub fn apply_connected(&mut self) -> Vec<SideEffect> {
        self.connection_status = ConnectionStatus::Connected;
        Vec::new()
    }

    /// Seed Botty's greeting, at most once per store lifetime.
    ///
    /// The greeting behaves like any other received message (sound, scroll)
    /// but does not update the latest-message summary and never hits the
    /// wire.
    pub fn seed_greeting(&mut self) -> Vec<SideEffect> {
        if self.greeted {
            return Vec::new();
        }
        self.greeted = true;
        self.append(Origin::Bot, INITIAL_BOT_MESSAGE)
    }

    /// Key tracked by the auto-scroll effect: changes whenever the list
    /// grows or the typing row appears/disappears.
    pub fn scroll_key(&self) -> (usize, bool) {
        (self.messages.len(), self.bot_typing)
    }
}
