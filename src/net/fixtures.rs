//! Static demo data for every portal page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal has no backend. `Fixtures` answers every page request from
//! inline records; the coordinator only sees the `DataSource` trait so a real
//! source can replace it without touching page logic.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::error::PortalError;
use crate::net::types::{
    ClassRecord, ClassSession, DashboardData, DashboardStats, GradeEntry, PageData, Priority, ScheduleSlot, Task,
    TaskStatus, Timetable, UpdateEvent,
};
use crate::state::page::PageId;

/// Source of records for a page. Must be deterministic for a given page.
pub trait DataSource: Send + Sync {
    fn fixtures(&self, page: PageId) -> PageData;
}

/// Inline demo records.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fixtures;

impl DataSource for Fixtures {
    fn fixtures(&self, page: PageId) -> PageData {
        match page {
            PageId::Dashboard => PageData::Dashboard(dashboard()),
            PageId::Classes => PageData::Classes(classes()),
            PageId::Tasks => PageData::Tasks(tasks()),
            PageId::Timetable => PageData::Timetable(timetable()),
            PageId::Grades => PageData::Grades(grades()),
            PageId::Settings => PageData::Settings,
        }
    }
}

/// Look up fixtures by raw page identifier.
///
/// # Errors
///
/// Returns [`PortalError::UnknownPage`] for identifiers outside the six pages.
pub fn fixtures_for(raw_page: &str) -> Result<PageData, PortalError> {
    let page: PageId = raw_page.parse()?;
    Ok(Fixtures.fixtures(page))
}

fn task(
    id: u32,
    subject: &str,
    title: &str,
    description: &str,
    due_date: &str,
    status: TaskStatus,
    priority: Priority,
) -> Task {
    Task {
        id,
        subject: subject.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        due_date: due_date.to_owned(),
        status,
        priority,
    }
}

fn update(id: u32, user: &str, action: &str, subject: &str, relative_time: &str) -> UpdateEvent {
    UpdateEvent {
        id,
        user: user.to_owned(),
        action: action.to_owned(),
        subject: subject.to_owned(),
        relative_time: relative_time.to_owned(),
    }
}

fn session(time: &str, subject: &str, room: &str, kind: &str) -> ClassSession {
    ClassSession {
        time: time.to_owned(),
        subject: subject.to_owned(),
        room: room.to_owned(),
        kind: kind.to_owned(),
    }
}

/// Dashboard counters, recent tasks, activity feed, and today's schedule.
pub fn dashboard() -> DashboardData {
    DashboardData {
        stats: DashboardStats {
            total_classes: 24,
            completed_tasks: 18,
            pending_tasks: 6,
            attendance_rate: 85,
        },
        recent_tasks: vec![
            task(1, "Mathematics", "Calculus Assignment", "", "2025-08-02", TaskStatus::Pending, Priority::High),
            task(2, "Physics", "Lab Report - Mechanics", "", "2025-08-01", TaskStatus::Completed, Priority::Medium),
            task(3, "Chemistry", "Organic Chemistry Quiz", "", "2025-08-03", TaskStatus::Pending, Priority::High),
            task(4, "English", "Essay on Modern Literature", "", "2025-08-05", TaskStatus::InProgress, Priority::Low),
        ],
        recent_updates: vec![
            update(1, "Dr. Smith", "assigned new task", "Mathematics", "2 hours ago"),
            update(2, "Prof. Johnson", "updated grade for", "Physics Lab", "4 hours ago"),
            update(3, "Admin", "scheduled class for", "Chemistry", "1 day ago"),
        ],
        today_schedule: vec![
            session("09:00 AM", "Mathematics", "Room 201", "Lecture"),
            session("11:00 AM", "Physics Lab", "Lab 305", "Practical"),
            session("02:00 PM", "Chemistry", "Room 102", "Lecture"),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn class(
    id: u32,
    title: &str,
    code: &str,
    instructor: &str,
    credits: u8,
    attendance_percent: u8,
    assignment_count: u32,
    letter_grade: &str,
) -> ClassRecord {
    ClassRecord {
        id,
        title: title.to_owned(),
        code: code.to_owned(),
        instructor: instructor.to_owned(),
        credits,
        attendance_percent,
        assignment_count,
        letter_grade: letter_grade.to_owned(),
    }
}

/// Enrolled courses.
pub fn classes() -> Vec<ClassRecord> {
    vec![
        class(1, "Advanced Mathematics", "MATH301", "Dr. Sarah Smith", 4, 92, 8, "A-"),
        class(2, "Physics Laboratory", "PHYS205", "Prof. John Johnson", 3, 88, 12, "B+"),
        class(3, "Organic Chemistry", "CHEM202", "Dr. Emily Brown", 4, 95, 6, "A"),
        class(4, "English Literature", "ENG101", "Prof. Michael Davis", 3, 90, 10, "B"),
    ]
}

/// Full task list.
pub fn tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Mathematics",
            "Calculus Assignment",
            "Complete exercises 1-15 from Chapter 8, focusing on integration by parts.",
            "2025-08-02",
            TaskStatus::Pending,
            Priority::High,
        ),
        task(
            2,
            "Physics",
            "Lab Report - Mechanics",
            "Write a comprehensive report on the pendulum experiment conducted last week.",
            "2025-08-01",
            TaskStatus::Completed,
            Priority::Medium,
        ),
        task(
            3,
            "Chemistry",
            "Organic Chemistry Quiz",
            "Prepare for quiz covering alkenes, alkynes, and aromatic compounds.",
            "2025-08-03",
            TaskStatus::Pending,
            Priority::High,
        ),
        task(
            4,
            "English",
            "Essay on Modern Literature",
            "Write a 1500-word essay analyzing themes in contemporary fiction.",
            "2025-08-05",
            TaskStatus::InProgress,
            Priority::Low,
        ),
        task(
            5,
            "Mathematics",
            "Geometry Problem Set",
            "Solve problems related to coordinate geometry and transformations.",
            "2025-07-28",
            TaskStatus::Overdue,
            Priority::High,
        ),
    ]
}

pub const TIME_SLOTS: [&str; 8] = ["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"];
pub const DAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Weekly timetable. Only Monday and Tuesday carry sessions.
pub fn timetable() -> Timetable {
    let week: [(&str, [&str; 8]); 2] = [
        (
            "Monday",
            ["Mathematics", "Physics", "Break", "Chemistry", "Lunch", "English", "Lab", ""],
        ),
        (
            "Tuesday",
            ["Physics", "Mathematics", "Break", "English", "Lunch", "Chemistry", "Lab", ""],
        ),
    ];
    let schedule = week
        .iter()
        .flat_map(|(day, subjects)| {
            TIME_SLOTS
                .iter()
                .zip(subjects.iter())
                .filter(|(_, subject)| !subject.is_empty())
                .map(|(time, subject)| ScheduleSlot {
                    day: (*day).to_owned(),
                    time: (*time).to_owned(),
                    subject: (*subject).to_owned(),
                })
        })
        .collect();

    Timetable {
        time_slots: TIME_SLOTS.iter().map(|s| (*s).to_owned()).collect(),
        days: DAYS.iter().map(|s| (*s).to_owned()).collect(),
        schedule,
    }
}

fn grade(subject: &str, assignment: &str, letter_grade: &str, points_fraction: &str, date: &str) -> GradeEntry {
    GradeEntry {
        subject: subject.to_owned(),
        assignment: assignment.to_owned(),
        letter_grade: letter_grade.to_owned(),
        points_fraction: points_fraction.to_owned(),
        date: date.to_owned(),
    }
}

/// Recent grades.
pub fn grades() -> Vec<GradeEntry> {
    vec![
        grade("Mathematics", "Midterm Exam", "A", "95/100", "2025-07-15"),
        grade("Physics", "Lab Report 1", "B+", "87/100", "2025-07-20"),
        grade("Chemistry", "Quiz 3", "A-", "91/100", "2025-07-25"),
        grade("English", "Essay Assignment", "B", "83/100", "2025-07-22"),
    ]
}

/// Messages emitted by the simulated real-time feed.
pub const UPDATE_MESSAGES: [&str; 4] = [
    "New assignment posted in Mathematics",
    "Grade updated for Physics Lab",
    "Reminder: Chemistry quiz tomorrow",
    "Class schedule updated",
];

/// Pick an update message from a uniform roll in `[0, 1)`.
pub fn pick_update(roll: f64) -> &'static str {
    let clamped = roll.clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = ((clamped * UPDATE_MESSAGES.len() as f64) as usize).min(UPDATE_MESSAGES.len() - 1);
    UPDATE_MESSAGES[index]
}
