//! Executor for the side-effect lists returned by chat state transitions.
//!
//! DESIGN
//! ======
//! Transitions on `ChatState` are pure and only describe their effects; the
//! caller runs them here after the signal update commits. Auto-scroll is
//! deliberately not an effect: it is a reactive concern of the message list
//! and tracked there via `ChatState::scroll_key`.

use leptos::prelude::{RwSignal, Update};

use crate::state::chat::SideEffect;
use crate::state::latest::{BOT_CONVERSATION_ID, LatestMessagesState};

/// Perform the effects of a committed chat state transition, in order.
pub fn perform(effects: &[SideEffect], latest: RwSignal<LatestMessagesState>) {
    for effect in effects {
        match effect {
            SideEffect::PlaySound(origin) => crate::util::sound::play_clip(*origin),
            SideEffect::UpdateLatestMessage { origin, text } => {
                latest.update(|l| l.set_latest_message(BOT_CONVERSATION_ID, *origin, text));
            }
        }
    }
}
