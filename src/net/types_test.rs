use super::*;

#[test]
fn default_profile_is_demo_student() {
    let profile = UserProfile::default();
    assert_eq!(profile.id, "STU001");
    assert_eq!(profile.name, "Alex Johnson");
    assert_eq!(profile.email, "alex.johnson@vit.edu");
    assert_eq!(profile.class_label, "Computer Science - Year 2");
}

#[test]
fn profile_serializes_class_label_as_class() {
    let json = serde_json::to_value(UserProfile::default()).unwrap();
    assert_eq!(json["class"], "Computer Science - Year 2");
    assert!(json.get("class_label").is_none());
}

#[test]
fn profile_reads_stored_json_shape() {
    let raw = r#"{"id":"STU042","name":"Sam Lee","email":"sam@vit.edu","class":"Physics - Year 1"}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, "STU042");
    assert_eq!(profile.class_label, "Physics - Year 1");
}

#[test]
fn task_status_uses_kebab_case_vocabulary() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "in-progress");
    assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
    assert_eq!(TaskStatus::parse("overdue"), Some(TaskStatus::Overdue));
    assert_eq!(TaskStatus::parse("in_progress"), None);
    assert_eq!(TaskStatus::parse("Completed"), None);
}

#[test]
fn task_reads_camel_case_due_date() {
    let raw = r#"{"id":7,"subject":"Art","title":"Sketch","dueDate":"2025-08-09","status":"pending","priority":"low"}"#;
    let task: Task = serde_json::from_str(raw).unwrap();
    assert_eq!(task.due_date, "2025-08-09");
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::Low);
}

#[test]
fn timetable_subject_at_returns_empty_for_free_slot() {
    let table = Timetable {
        time_slots: vec!["09:00".to_owned()],
        days: vec!["Monday".to_owned(), "Friday".to_owned()],
        schedule: vec![ScheduleSlot {
            day: "Monday".to_owned(),
            time: "09:00".to_owned(),
            subject: "Mathematics".to_owned(),
        }],
    };
    assert_eq!(table.subject_at("Monday", "09:00"), "Mathematics");
    assert_eq!(table.subject_at("Friday", "09:00"), "");
    assert_eq!(table.subject_at("Monday", "10:00"), "");
}

#[test]
fn settings_page_data_is_empty() {
    assert!(PageData::Settings.is_empty());
    assert_eq!(PageData::Settings.page(), PageId::Settings);
}
