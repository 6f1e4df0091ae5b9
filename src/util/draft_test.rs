use super::*;

// =============================================================
// Send-enabled rule
// =============================================================

#[test]
fn empty_draft_cannot_send() {
    assert!(!can_send(""));
}

#[test]
fn text_draft_can_send() {
    assert!(can_send("hello"));
}

#[test]
fn whitespace_only_draft_can_send() {
    assert!(can_send(" "));
    assert!(can_send("\n"));
    assert!(can_send("\t  "));
}
