//! Animated row shown while Botty composes a reply.

use leptos::prelude::*;

/// Typing indicator rendered after the last message row while the bot is
/// composing; removed as soon as the reply arrives.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message--bot message--typing">
            <div class="message__bubble">
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
            </div>
        </div>
    }
}
