use quicktodo_core::{Task, TaskValidationError};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn new_trims_title_and_generates_id() {
    let task = Task::new("  Buy milk  ").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Buy milk");
}

#[test]
fn new_rejects_blank_titles() {
    for raw in ["", " ", "   ", "\t", "\n", " \t\r\n "] {
        let err = Task::new(raw).unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyTitle, "input {raw:?}");
    }
}

#[test]
fn ids_are_pairwise_distinct_across_creations() {
    let ids: HashSet<_> = (0..100)
        .map(|index| Task::new(&format!("task {index}")).unwrap().id)
        .collect();

    assert_eq!(ids.len(), 100);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "valid title").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(task_id, "Water plants").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["title"], "Water plants");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn validate_rejects_whitespace_only_title() {
    let task = Task {
        id: Uuid::new_v4(),
        title: "   ".to_string(),
    };

    let err = task.validate().unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);
}
