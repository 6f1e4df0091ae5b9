use super::*;

// =============================================================
// Status presentation
// =============================================================

#[test]
fn status_labels_cover_every_state() {
    assert_eq!(connection_status_label(ConnectionStatus::Disconnected), "Offline");
    assert_eq!(connection_status_label(ConnectionStatus::Connecting), "Connecting…");
    assert_eq!(connection_status_label(ConnectionStatus::Connected), "Online");
}

#[test]
fn status_classes_are_distinct() {
    let disconnected = connection_status_class(ConnectionStatus::Disconnected);
    let connecting = connection_status_class(ConnectionStatus::Connecting);
    let connected = connection_status_class(ConnectionStatus::Connected);
    assert_ne!(disconnected, connecting);
    assert_ne!(connecting, connected);
    assert_ne!(disconnected, connected);
}
