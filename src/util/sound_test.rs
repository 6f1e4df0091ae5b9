use super::*;

// =============================================================
// Clip selection
// =============================================================

#[test]
fn my_messages_use_the_send_clip() {
    assert_eq!(clip_for(Origin::Me), SEND_CLIP);
}

#[test]
fn bot_messages_use_the_receive_clip() {
    assert_eq!(clip_for(Origin::Bot), RECEIVE_CLIP);
}

#[test]
fn send_and_receive_clips_differ() {
    assert_ne!(SEND_CLIP, RECEIVE_CLIP);
}
