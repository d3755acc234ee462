use super::*;
use crate::net::error::ApiError;

#[test]
fn status_message_covers_each_read_state() {
    assert_eq!(status_message::<u8>(None, "none"), Some("Loading...".to_owned()));
    assert_eq!(status_message::<u8>(Some(&ReadOutcome::Empty), "No posts yet."), Some("No posts yet.".to_owned()));
    assert_eq!(status_message(Some(&ReadOutcome::Loaded(1_u8)), "none"), None);
}

#[test]
fn status_message_distinguishes_failure_from_empty() {
    let failed = ReadOutcome::<u8>::Failed(ApiError::Status { status: 500, body: r#"{"message":"boom"}"#.to_owned() });
    assert_eq!(status_message(Some(&failed), "No posts yet."), Some("Could not load: boom".to_owned()));
}

#[test]
fn loaded_defaults_unless_value_is_present() {
    let rows = ReadOutcome::Loaded(vec![1, 2, 3]);
    assert_eq!(loaded(Some(&rows), Vec::len), 3);
    assert_eq!(loaded(Some(&ReadOutcome::<Vec<u8>>::Empty), Vec::len), 0);
    assert_eq!(loaded::<Vec<u8>, usize>(None, Vec::len), 0);
}
