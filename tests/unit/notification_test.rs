//! Unit tests for notification delivery results

use reviewbot::notification::NotificationResult;

#[test]
fn test_success_result() {
    let result = NotificationResult::success(Some(200));

    assert!(result.success);
    assert_eq!(result.http_status, Some(200));
    assert!(result.error_message.is_none());
}

#[test]
fn test_failure_result() {
    let result = NotificationResult::failure("chat not found".to_string(), Some(400));

    assert!(!result.success);
    assert_eq!(result.http_status, Some(400));
    assert_eq!(result.error_message.as_deref(), Some("chat not found"));
}

#[test]
fn test_failure_result_without_status() {
    let result = NotificationResult::failure("connection failed".to_string(), None);

    assert!(!result.success);
    assert!(result.http_status.is_none());
}
