use super::*;

// =============================================================
// LatestMessagesState
// =============================================================

#[test]
fn latest_state_default_is_empty() {
    let state = LatestMessagesState::default();
    assert!(state.latest.is_empty());
    assert!(state.latest_for(BOT_CONVERSATION_ID).is_none());
}

#[test]
fn set_latest_message_records_origin_and_text() {
    let mut state = LatestMessagesState::default();
    state.set_latest_message(BOT_CONVERSATION_ID, Origin::Bot, "hi there");

    let latest = state
        .latest_for(BOT_CONVERSATION_ID)
        .expect("summary should exist");
    assert_eq!(latest.origin, Origin::Bot);
    assert_eq!(latest.text, "hi there");
}

#[test]
fn set_latest_message_overwrites_previous_summary() {
    let mut state = LatestMessagesState::default();
    state.set_latest_message(BOT_CONVERSATION_ID, Origin::Bot, "first");
    state.set_latest_message(BOT_CONVERSATION_ID, Origin::Bot, "second");

    assert_eq!(state.latest.len(), 1);
    assert_eq!(
        state.latest_for(BOT_CONVERSATION_ID).map(|m| m.text.as_str()),
        Some("second")
    );
}

#[test]
fn conversations_are_keyed_independently() {
    let mut state = LatestMessagesState::default();
    state.set_latest_message(BOT_CONVERSATION_ID, Origin::Bot, "hello");
    state.set_latest_message("support", Origin::Me, "ticket?");

    assert_eq!(state.latest.len(), 2);
    assert_eq!(
        state.latest_for("support").map(|m| m.origin),
        Some(Origin::Me)
    );
}
