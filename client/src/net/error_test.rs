use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 401, body: r#"{"success":false,"message":"Unauthorized"}"#.to_owned() };
    assert_eq!(err.user_message(), "Unauthorized");
}

#[test]
fn user_message_falls_back_to_status() {
    let err = ApiError::Status { status: 502, body: "<html>bad gateway</html>".to_owned() };
    assert_eq!(err.user_message(), "Request failed (502)");
}

#[test]
fn user_message_for_transport_failure_is_display() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message(), "request failed: connection refused");
}
