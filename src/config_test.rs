use super::*;

// =============================================================
// Endpoint resolution
// =============================================================

#[test]
fn default_endpoint_is_a_websocket_url() {
    assert!(DEFAULT_BOT_SERVER_ENDPOINT.starts_with("ws://"));
}

#[test]
fn bot_server_endpoint_is_never_empty() {
    assert!(!bot_server_endpoint().is_empty());
}
