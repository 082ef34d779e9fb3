use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn status_4xx_is_client_kind() {
    let err = ApiError::status(404, "Not found");
    assert_eq!(err.kind, ErrorKind::Client);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Not found");
}

#[test]
fn status_5xx_is_server_kind() {
    let err = ApiError::status(503, "Service unavailable");
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.status, Some(503));
}

#[test]
fn transport_has_no_status() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.kind, ErrorKind::Transport);
    assert!(err.status.is_none());
}

// =============================================================
// Message fallbacks
// =============================================================

#[test]
fn status_message_is_never_empty() {
    assert!(!ApiError::status(502, "").message.is_empty());
    assert!(!ApiError::status(400, "   ").message.is_empty());
}

#[test]
fn transport_message_is_never_empty() {
    assert!(!ApiError::transport("").message.is_empty());
}

#[test]
fn display_is_the_message() {
    assert_eq!(ApiError::status(404, "Not found").to_string(), "Not found");
}
