use super::*;

// =============================================================
// Display
// =============================================================

#[test]
fn server_error_displays_status() {
    let err = ChatError::Server { status: 502 };
    assert_eq!(err.to_string(), "Server error: 502");
}

#[test]
fn network_error_displays_cause() {
    let err = ChatError::network("connection refused");
    assert_eq!(err.to_string(), "Network error: connection refused");
}

// =============================================================
// Classification
// =============================================================

#[test]
fn network_and_serialize_are_transport() {
    assert!(ChatError::network("down").is_transport());
    assert!(ChatError::Serialize("bad".into()).is_transport());
    assert!(!ChatError::network("down").is_server());
}

#[test]
fn status_and_parse_are_server() {
    assert!(ChatError::Server { status: 500 }.is_server());
    assert!(ChatError::parse("expected value").is_server());
    assert!(!ChatError::Server { status: 404 }.is_transport());
}
