use chrono::{TimeZone, Utc};
use taskdock::types::{Priority, Task};
use taskdock::utils::*;

// Helper function to create a test task
fn create_test_task(id: &str, title: &str, completed: bool, due: Option<(i32, u32, u32)>) -> Task {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    Task {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        title: title.to_string(),
        description: None,
        is_completed: completed,
        created_at: created,
        updated_at: created,
        due_date: due.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
        priority: Priority::Medium,
    }
}

#[test]
fn test_parse_timestamp_rfc3339() {
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    assert_eq!(parse_timestamp("2024-05-01T10:00:00Z"), Some(expected));

    // Offsets are normalized to UTC
    assert_eq!(parse_timestamp("2024-05-01T12:00:00+02:00"), Some(expected));
}

#[test]
fn test_parse_timestamp_naive_is_utc() {
    let parsed = parse_timestamp("2024-05-01T10:00:00.123456").unwrap();
    assert_eq!(
        parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2024-05-01 10:00:00"
    );
    assert_eq!(parsed.timestamp_subsec_micros(), 123456);

    // Space separator as written by some database drivers
    assert_eq!(
        parse_timestamp("2024-05-01 10:00:00"),
        Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_timestamp_date_only() {
    assert_eq!(
        parse_timestamp("2024-12-24"),
        Some(Utc.with_ymd_and_hms(2024, 12, 24, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_parse_timestamp_invalid() {
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("tomorrow"), None);
    assert_eq!(parse_timestamp("2024-13-01"), None);
}

#[test]
fn test_parse_due_date_error_mentions_input() {
    let err = parse_due_date("next friday").unwrap_err();
    assert!(err.contains("next friday"));
    assert!(parse_due_date("2024-06-30").is_ok());
}

#[test]
fn test_cookie_value_found() {
    let cookies = "theme=dark; better-auth.session_token=abc123; lang=en";
    assert_eq!(
        cookie_value(cookies, "better-auth.session_token"),
        Some("abc123".to_string())
    );
}

#[test]
fn test_cookie_value_keeps_padding() {
    let cookies = "better-auth.session_token=dG9rZW4=";
    assert_eq!(
        cookie_value(cookies, "better-auth.session_token"),
        Some("dG9rZW4=".to_string())
    );
}

#[test]
fn test_cookie_value_missing_or_empty() {
    assert_eq!(cookie_value("", "better-auth.session_token"), None);
    assert_eq!(cookie_value("theme=dark", "better-auth.session_token"), None);
    assert_eq!(
        cookie_value("better-auth.session_token=", "better-auth.session_token"),
        None
    );
    // Name must match exactly, not as a prefix
    assert_eq!(
        cookie_value("better-auth.session_token_old=x", "better-auth.session_token"),
        None
    );
}

#[test]
fn test_sort_tasks() {
    let mut tasks = vec![
        create_test_task("1", "Done thing", true, Some((2024, 1, 1))),
        create_test_task("2", "zebra", false, None),
        create_test_task("3", "Later", false, Some((2024, 3, 1))),
        create_test_task("4", "Sooner", false, Some((2024, 2, 1))),
        create_test_task("5", "apple", false, None),
    ];

    sort_tasks(&mut tasks);

    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    // open before done, dated before undated, then title (case-insensitive)
    assert_eq!(ids, vec!["4", "3", "5", "2", "1"]);
}

#[test]
fn test_sort_tasks_empty() {
    let mut tasks: Vec<Task> = Vec::new();
    sort_tasks(&mut tasks);
    assert!(tasks.is_empty());
}
