use super::*;

#[test]
fn every_page_returns_its_own_record_kind() {
    for page in PageId::ALL {
        assert_eq!(Fixtures.fixtures(page).page(), page);
    }
}

#[test]
fn fixtures_are_deterministic() {
    for page in PageId::ALL {
        assert_eq!(Fixtures.fixtures(page), Fixtures.fixtures(page));
    }
}

#[test]
fn unknown_page_is_reported_consistently() {
    assert_eq!(fixtures_for("reports"), Err(PortalError::UnknownPage("reports".to_owned())));
    assert_eq!(fixtures_for(""), Err(PortalError::UnknownPage(String::new())));
}

#[test]
fn known_raw_page_resolves() {
    let data = fixtures_for("grades").unwrap();
    assert_eq!(data.len(), 4);
}

#[test]
fn settings_has_no_records() {
    assert!(fixtures_for("settings").unwrap().is_empty());
}

#[test]
fn dashboard_stats_match_headline_counters() {
    let data = dashboard();
    assert_eq!(data.stats.total_classes, 24);
    assert_eq!(data.stats.completed_tasks, 18);
    assert_eq!(data.stats.pending_tasks, 6);
    assert_eq!(data.stats.attendance_rate, 85);
    assert_eq!(data.recent_tasks.len(), 4);
    assert_eq!(data.recent_updates.len(), 3);
    assert_eq!(data.today_schedule.len(), 3);
}

#[test]
fn task_list_covers_every_status() {
    let list = tasks();
    assert_eq!(list.len(), 5);
    for status in TaskStatus::ALL {
        assert!(list.iter().any(|t| t.status == status), "missing {status}");
    }
    let ids: Vec<_> = list.iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn timetable_only_schedules_monday_and_tuesday() {
    let table = timetable();
    assert_eq!(table.time_slots.len(), 8);
    assert_eq!(table.days.len(), 7);
    assert!(table.schedule.iter().all(|s| s.day == "Monday" || s.day == "Tuesday"));
    assert_eq!(table.subject_at("Monday", "11:00"), "Break");
    assert_eq!(table.subject_at("Tuesday", "14:00"), "Chemistry");
    assert_eq!(table.subject_at("Monday", "16:00"), "");
    assert_eq!(table.subject_at("Wednesday", "09:00"), "");
}

#[test]
fn pick_update_covers_range_edges() {
    assert_eq!(pick_update(0.0), UPDATE_MESSAGES[0]);
    assert_eq!(pick_update(0.26), UPDATE_MESSAGES[1]);
    assert_eq!(pick_update(0.999), UPDATE_MESSAGES[3]);
    assert_eq!(pick_update(1.0), UPDATE_MESSAGES[3]);
    assert_eq!(pick_update(-4.0), UPDATE_MESSAGES[0]);
}
