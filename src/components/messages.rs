//! The chat view: header, scrollable message list, typing row, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component composes the whole widget and owns its view-level
//! orchestration: seeding Botty's greeting on mount and keeping the newest
//! entry scrolled into view. All chat data lives in the `ChatState` context.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::message_row::MessageRow;
use crate::components::typing_indicator::TypingIndicator;
use crate::state::chat::ChatState;
use crate::state::latest::LatestMessagesState;

/// Chat view showing the message history, typing indicator, and input row.
#[component]
pub fn Messages() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let latest = expect_context::<RwSignal<LatestMessagesState>>();
    let list_end_ref = NodeRef::<leptos::html::Div>::new();

    // Seed Botty's greeting. The component body runs once per mount, and the
    // store-level guard keeps a remount from repeating it.
    let greeting_effects = chat.try_update(ChatState::seed_greeting).unwrap_or_default();
    crate::util::effects::perform(&greeting_effects, latest);

    // Bring the newest row into view whenever the list grows or the typing
    // row appears/disappears.
    Effect::new(move || {
        let _ = chat.with(ChatState::scroll_key);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_end_ref.get() {
                crate::util::scroll::scroll_into_view_smooth(&el);
            }
        }
    });

    view! {
        <div class="messages">
            <Header/>
            <div class="messages__list" id="message-list">
                {move || {
                    let messages = chat.get().messages;
                    messages
                        .iter()
                        .enumerate()
                        .map(|(index, message)| {
                            let next = messages.get(index + 1).cloned();
                            view! { <MessageRow message=message.clone() next=next/> }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || chat.get().bot_typing.then(|| view! { <TypingIndicator/> })}
                <div class="messages__list-end" node_ref=list_end_ref></div>
            </div>
            <Footer/>
        </div>
    }
}
