use super::*;

// =============================================================
// ServerEvent decoding
// =============================================================

#[test]
fn bot_message_decodes_with_payload() {
    let event: ServerEvent =
        serde_json::from_str(r#"{"event":"bot-message","data":"hi there"}"#).expect("should decode");
    assert_eq!(event, ServerEvent::BotMessage("hi there".to_owned()));
}

#[test]
fn bot_typing_decodes_without_payload() {
    let event: ServerEvent =
        serde_json::from_str(r#"{"event":"bot-typing"}"#).expect("should decode");
    assert_eq!(event, ServerEvent::BotTyping);
}

#[test]
fn connect_decodes_without_payload() {
    let event: ServerEvent = serde_json::from_str(r#"{"event":"connect"}"#).expect("should decode");
    assert_eq!(event, ServerEvent::Connect);
}

#[test]
fn unknown_event_names_are_rejected() {
    assert!(serde_json::from_str::<ServerEvent>(r#"{"event":"bot-dancing"}"#).is_err());
}

#[test]
fn bot_message_without_payload_is_rejected() {
    assert!(serde_json::from_str::<ServerEvent>(r#"{"event":"bot-message"}"#).is_err());
}

// =============================================================
// ClientEvent encoding
// =============================================================

#[test]
fn user_message_encodes_event_name_and_raw_text() {
    let json = serde_json::to_value(ClientEvent::UserMessage("  hello ".to_owned()))
        .expect("should encode");
    assert_eq!(
        json,
        serde_json::json!({ "event": "user-message", "data": "  hello " })
    );
}

#[test]
fn user_message_round_trips() {
    let event = ClientEvent::UserMessage("hello".to_owned());
    let json = serde_json::to_string(&event).expect("should encode");
    let back: ClientEvent = serde_json::from_str(&json).expect("should decode");
    assert_eq!(back, event);
}
