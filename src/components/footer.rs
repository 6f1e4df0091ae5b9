//! Input footer: draft text field and send button.

use leptos::prelude::*;

use crate::app::SocketSender;
use crate::net::types::ClientEvent;
use crate::state::chat::{ChatState, Origin};
use crate::state::latest::LatestMessagesState;
use crate::util::draft::can_send;

/// Footer row with the draft input and the send control.
///
/// Sending appends the draft as a local message, emits it on the socket
/// (fire-and-forget), and clears the field. The button is enabled exactly
/// when the draft is non-empty.
#[component]
pub fn Footer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let latest = expect_context::<RwSignal<LatestMessagesState>>();
    let sender = expect_context::<RwSignal<SocketSender>>();

    let input = RwSignal::new(String::new());

    let send_enabled = move || can_send(&input.get());

    let do_send = move || {
        let text = input.get();
        if !can_send(&text) {
            return;
        }

        let effects = chat
            .try_update(|c| c.append(Origin::Me, text.clone()))
            .unwrap_or_default();
        crate::util::effects::perform(&effects, latest);
        sender.get().send(&ClientEvent::UserMessage(text));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="messages__footer">
            <input
                class="messages__input"
                id="user-message-input"
                type="text"
                placeholder="Message Botty…"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="messages__send"
                on:click=on_click
                disabled=move || !send_enabled()
            >
                "Send"
            </button>
        </div>
    }
}
