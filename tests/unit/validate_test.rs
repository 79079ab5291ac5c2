//! Unit tests for response shape validation

use pretty_assertions::assert_eq;
use serde_json::json;

use reviewbot::api::extract_homeworks;
use reviewbot::error::PollError;

#[test]
fn test_extract_empty_list() {
    let body = json!({"homeworks": [], "current_date": 1000});

    let (homeworks, next) = extract_homeworks(&body, 500).unwrap();

    assert!(homeworks.is_empty());
    assert_eq!(next, 1000);
}

#[test]
fn test_extract_records() {
    let body = json!({
        "homeworks": [
            {"homework_name": "hw1", "status": "approved"},
            {"homework_name": "hw2", "status": "reviewing"}
        ],
        "current_date": 2000
    });

    let (homeworks, next) = extract_homeworks(&body, 1000).unwrap();

    assert_eq!(homeworks.len(), 2);
    assert_eq!(homeworks[0].homework_name.as_deref(), Some("hw1"));
    assert_eq!(homeworks[0].status.as_deref(), Some("approved"));
    assert_eq!(homeworks[1].homework_name.as_deref(), Some("hw2"));
    assert_eq!(next, 2000);
}

#[test]
fn test_extract_record_with_missing_fields_is_kept() {
    // Record-level validation happens at formatting time, not here
    let body = json!({"homeworks": [{"status": "approved"}], "current_date": 1000});

    let (homeworks, _) = extract_homeworks(&body, 0).unwrap();

    assert_eq!(homeworks.len(), 1);
    assert!(homeworks[0].homework_name.is_none());
}

#[test]
fn test_extract_homeworks_not_a_list() {
    let body = json!({"homeworks": "not-a-list", "current_date": 1000});

    assert!(matches!(
        extract_homeworks(&body, 0),
        Err(PollError::Shape(_))
    ));
}

#[test]
fn test_extract_homeworks_missing() {
    let body = json!({"current_date": 1000});

    assert!(matches!(
        extract_homeworks(&body, 0),
        Err(PollError::Shape(_))
    ));
}

#[test]
fn test_extract_non_object_body() {
    let body = json!([{"homework_name": "hw1", "status": "approved"}]);

    assert!(matches!(
        extract_homeworks(&body, 0),
        Err(PollError::Shape(_))
    ));
}

#[test]
fn test_extract_record_not_an_object() {
    let body = json!({"homeworks": ["oops"], "current_date": 1000});

    assert!(matches!(
        extract_homeworks(&body, 0),
        Err(PollError::Shape(_))
    ));
}

#[test]
fn test_extract_missing_current_date_keeps_prior() {
    let body = json!({"homeworks": []});

    let (_, next) = extract_homeworks(&body, 777).unwrap();

    assert_eq!(next, 777);
}

#[test]
fn test_extract_non_integer_current_date() {
    let body = json!({"homeworks": [], "current_date": "soon"});

    assert!(matches!(
        extract_homeworks(&body, 0),
        Err(PollError::Shape(_))
    ));
}

#[test]
fn test_extract_is_pure() {
    let body = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 2000
    });

    let (first, first_next) = extract_homeworks(&body, 1000).unwrap();
    let (second, second_next) = extract_homeworks(&body, 1000).unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(first_next, second_next);
}
