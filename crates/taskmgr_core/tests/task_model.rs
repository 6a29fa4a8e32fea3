use chrono::NaiveDate;
use taskmgr_core::{parse_due_date, Priority, Task, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello").unwrap();

    assert!(!task.id().is_nil());
    assert_eq!(task.title, "hello");
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
    assert!(!task.completed);
}

#[test]
fn task_new_rejects_blank_title() {
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyTitle);
    assert_eq!(Task::new(" \t").unwrap_err(), TaskValidationError::EmptyTitle);
}

#[test]
fn each_task_gets_a_distinct_id() {
    let a = Task::new("a").unwrap();
    let b = Task::new("a").unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::new("Plan sprint")
        .unwrap()
        .with_description("pick stories")
        .with_priority(Priority::High)
        .with_due_date(Some(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task.id().to_string());
    assert_eq!(json["title"], "Plan sprint");
    assert_eq!(json["description"], "pick stories");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["due_date"], "2025-01-31");
    assert_eq!(json["completed"], false);
    assert!(json["created_at"].is_string());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_accepts_records_without_id() {
    let value = serde_json::json!({
        "title": "legacy",
        "description": "",
        "priority": "low",
        "due_date": null,
        "completed": true,
        "created_at": "2024-05-01T09:30:00.123456"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert!(!task.id().is_nil());
    assert_eq!(task.priority, Priority::Low);
    assert!(task.completed);
}

#[test]
fn deserialize_rejects_invalid_priority() {
    let value = serde_json::json!({
        "title": "bad",
        "priority": "urgent",
        "created_at": "2024-05-01T09:30:00"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid priority `urgent`"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_empty_title() {
    let value = serde_json::json!({
        "title": "",
        "priority": "medium",
        "created_at": "2024-05-01T09:30:00"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("title cannot be empty"));
}

#[test]
fn parse_due_date_reports_original_text() {
    let err = parse_due_date("31/01/2025").unwrap_err();
    assert_eq!(err, TaskValidationError::InvalidDueDate("31/01/2025".into()));
}
