use super::*;
use crate::net::fixtures;
use crate::net::types::Priority;

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_date_uses_us_short_style() {
    assert_eq!(format_date("2025-08-02"), "Aug 2, 2025");
    assert_eq!(format_date("2025-07-28"), "Jul 28, 2025");
    assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
}

#[test]
fn format_date_echoes_unparseable_input() {
    assert_eq!(format_date("next week"), "next week");
    assert_eq!(format_date("2025-02-30"), "2025-02-30");
}

#[test]
fn week_label_spells_out_month() {
    let date = Date::from_calendar_date(2026, Month::October, 19).unwrap();
    assert_eq!(week_label(date), "Week of October 19, 2026");
}

#[test]
fn iso_date_pads_and_parses_back() {
    let date = Date::from_calendar_date(2026, Month::March, 5).unwrap();
    assert_eq!(iso_date(date), "2026-03-05");
    assert_eq!(parse_iso_date(&iso_date(date)), Some(date));
}

#[test]
fn grade_class_uses_first_letter_lowercased() {
    assert_eq!(grade_class("A-"), "grade-a");
    assert_eq!(grade_class("B+"), "grade-b");
    assert_eq!(grade_class(""), "grade-");
}

#[test]
fn progress_degrees_scale_percent_to_circle() {
    assert_eq!(progress_degrees(85.0), 306.0);
    assert_eq!(progress_degrees(0.0), 0.0);
    assert_eq!(progress_degrees(150.0), 360.0);
}

#[test]
fn progress_style_builds_conic_gradient() {
    assert_eq!(
        progress_style(50.0),
        "background: conic-gradient(var(--primary-color) 180deg, var(--border-color) 180deg)"
    );
}

// =============================================================
// Record views
// =============================================================

#[test]
fn task_view_carries_badges_and_priority() {
    let task = &fixtures::tasks()[0];
    let view = task.to_view();
    assert_eq!(view.due, "Due: Aug 2, 2025");
    assert_eq!(view.status_class, "status-badge status-pending");
    assert_eq!(view.item_class, "task-item high-priority");
    assert!(view.can_complete);
}

#[test]
fn completed_task_cannot_be_completed_again() {
    let mut task = fixtures::tasks()[0].clone();
    task.status = TaskStatus::Completed;
    task.priority = Priority::Low;
    let view = task.to_view();
    assert!(!view.can_complete);
    assert_eq!(view.item_class, "task-item low-priority");
}

#[test]
fn task_search_text_covers_title_subject_description() {
    let task = &fixtures::tasks()[1];
    let text = task.search_text();
    assert!(text.contains("Lab Report - Mechanics"));
    assert!(text.contains("Physics"));
    assert!(text.contains("pendulum"));
}

#[test]
fn recent_task_row_formats_due_date() {
    let data = fixtures::dashboard();
    let view = RecentTaskRow(&data.recent_tasks[3]).to_view();
    assert_eq!(view.due, "Aug 5, 2025");
    assert_eq!(view.status_class, "status-badge status-in-progress");
    assert!(RecentTaskRow(&data.recent_tasks[3]).search_text().is_empty());
}

#[test]
fn class_card_lists_four_stats() {
    let view = fixtures::classes()[1].to_view();
    assert_eq!(view.instructor, "Instructor: Prof. John Johnson");
    let stats: Vec<_> = view.stats.iter().map(|s| (s.value.as_str(), s.label)).collect();
    assert_eq!(
        stats,
        [("3", "Credits"), ("88%", "Attendance"), ("12", "Assignments"), ("B+", "Grade")]
    );
}

#[test]
fn class_card_labels_instructor_once() {
    for class in fixtures::classes() {
        let drawn = class.to_view().instructor;
        assert_eq!(drawn.matches("Instructor:").count(), 1, "drawn text: {drawn}");
        assert!(drawn.ends_with(&class.instructor));
    }
}

#[test]
fn grade_row_formats_badge_and_date() {
    let view = fixtures::grades()[2].to_view();
    assert_eq!(view.grade_class, "grade-value grade-a");
    assert_eq!(view.points, "91/100");
    assert_eq!(view.date, "Jul 25, 2025");
}

#[test]
fn update_item_avatar_is_first_character() {
    let view = fixtures::dashboard().recent_updates[1].to_view();
    assert_eq!(view.avatar, "P");
    assert_eq!(view.time, "4 hours ago");
}

#[test]
fn schedule_item_joins_room_and_kind() {
    let view = fixtures::dashboard().today_schedule[1].to_view();
    assert_eq!(view.detail, "Lab 305 - Practical");
}

#[test]
fn stats_view_appends_percent_to_attendance() {
    let view = StatsView::from(fixtures::dashboard().stats);
    assert_eq!(view.total_classes, "24");
    assert_eq!(view.completed_tasks, "18");
    assert_eq!(view.pending_tasks, "6");
    assert_eq!(view.attendance, "85%");
}

// =============================================================
// Timetable
// =============================================================

#[test]
fn timetable_grid_has_header_and_slot_rows() {
    let view = timetable_view(&fixtures::timetable());
    assert_eq!(view.columns, 8);
    assert_eq!(view.rows(), 9);
    assert_eq!(view.cells[0].text, "");
    assert_eq!(view.cells[0].kind, CellKind::TimeSlot);
    assert_eq!(view.cells[1].text, "Monday");
    assert_eq!(view.cells[1].kind, CellKind::DayHeader);
}

#[test]
fn timetable_grid_marks_breaks() {
    let view = timetable_view(&fixtures::timetable());
    // Row 3 is 11:00; column 1 is Monday.
    let monday_eleven = &view.cells[3 * view.columns + 1];
    assert_eq!(monday_eleven.text, "Break");
    assert_eq!(monday_eleven.kind.class(), "class-slot break");
    let monday_nine = &view.cells[view.columns + 1];
    assert_eq!(monday_nine.text, "Mathematics");
    assert_eq!(monday_nine.kind, CellKind::Class);
}

#[test]
fn timetable_grid_leaves_unscheduled_days_blank() {
    let view = timetable_view(&fixtures::timetable());
    let friday_nine = &view.cells[view.columns + 5];
    assert_eq!(friday_nine.text, "");
    assert_eq!(friday_nine.kind, CellKind::Class);
}

#[test]
fn empty_timetable_view_has_no_rows() {
    assert_eq!(TimetableView::default().rows(), 0);
}
