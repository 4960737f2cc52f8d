//! View-models for each record shape, plus the formatting they share.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use time::{Date, Month};

use super::Render;
use crate::net::types::{
    ClassRecord, ClassSession, DashboardStats, GradeEntry, Task, TaskStatus, Timetable, UpdateEvent,
};

// =============================================================================
// FORMATTING
// =============================================================================

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let mut parts = raw.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    Date::from_calendar_date(year, Month::try_from(month).ok()?, day).ok()
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

fn month_short(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// US short date, `2025-08-02` -> `Aug 2, 2025`. Unparseable input is echoed.
pub fn format_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => format!("{} {}, {}", month_short(date.month()), date.day(), date.year()),
        None => raw.to_owned(),
    }
}

/// Timetable header, e.g. `Week of October 19, 2026`.
pub fn week_label(date: Date) -> String {
    format!("Week of {} {}, {}", date.month(), date.day(), date.year())
}

/// Badge class for a letter grade: `B+` -> `grade-b`.
pub fn grade_class(letter_grade: &str) -> String {
    let first = letter_grade
        .chars()
        .next()
        .map(|c| c.to_lowercase().to_string())
        .unwrap_or_default();
    format!("grade-{first}")
}

pub fn status_class(status: TaskStatus) -> String {
    format!("status-badge status-{status}")
}

/// Sweep of a progress circle in degrees.
pub fn progress_degrees(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0) * 360.0 / 100.0
}

/// Conic-gradient background for a progress circle.
pub fn progress_style(percent: f64) -> String {
    let degrees = progress_degrees(percent);
    format!("background: conic-gradient(var(--primary-color) {degrees}deg, var(--border-color) {degrees}deg)")
}

// =============================================================================
// TASKS
// =============================================================================

/// Task card on the tasks page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskItemView {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due: String,
    pub status: TaskStatus,
    pub status_class: String,
    pub item_class: String,
    pub can_complete: bool,
}

impl Render for Task {
    type View = TaskItemView;

    fn key(&self) -> String {
        format!("task-{}", self.id)
    }

    fn to_view(&self) -> TaskItemView {
        TaskItemView {
            id: self.id,
            title: self.title.clone(),
            subject: self.subject.clone(),
            description: self.description.clone(),
            due: format!("Due: {}", format_date(&self.due_date)),
            status: self.status,
            status_class: status_class(self.status),
            item_class: format!("task-item {}-priority", self.priority.as_str()),
            can_complete: self.status != TaskStatus::Completed,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.subject, self.description)
    }
}

/// Dashboard "recent tasks" table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentTaskView {
    pub id: u32,
    pub subject: String,
    pub title: String,
    pub due: String,
    pub status: TaskStatus,
    pub status_class: String,
}

/// Adapter drawing a task as a dashboard table row.
pub struct RecentTaskRow<'a>(pub &'a Task);

impl Render for RecentTaskRow<'_> {
    type View = RecentTaskView;

    fn key(&self) -> String {
        format!("recent-task-{}", self.0.id)
    }

    fn to_view(&self) -> RecentTaskView {
        let task = self.0;
        RecentTaskView {
            id: task.id,
            subject: task.subject.clone(),
            title: task.title.clone(),
            due: format_date(&task.due_date),
            status: task.status,
            status_class: status_class(task.status),
        }
    }
}

// =============================================================================
// CLASSES, GRADES, FEED
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassStat {
    pub value: String,
    pub label: &'static str,
}

/// Course card on the classes page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassCardView {
    pub title: String,
    pub code: String,
    pub instructor: String,
    pub stats: Vec<ClassStat>,
}

impl Render for ClassRecord {
    type View = ClassCardView;

    fn key(&self) -> String {
        format!("class-{}", self.id)
    }

    fn to_view(&self) -> ClassCardView {
        ClassCardView {
            title: self.title.clone(),
            code: self.code.clone(),
            instructor: format!("Instructor: {}", self.instructor),
            stats: vec![
                ClassStat { value: self.credits.to_string(), label: "Credits" },
                ClassStat { value: format!("{}%", self.attendance_percent), label: "Attendance" },
                ClassStat { value: self.assignment_count.to_string(), label: "Assignments" },
                ClassStat { value: self.letter_grade.clone(), label: "Grade" },
            ],
        }
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.code, self.instructor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeRowView {
    pub subject: String,
    pub assignment: String,
    pub grade: String,
    pub grade_class: String,
    pub points: String,
    pub date: String,
}

impl Render for GradeEntry {
    type View = GradeRowView;

    fn key(&self) -> String {
        format!("grade-{}-{}", self.subject, self.assignment)
    }

    fn to_view(&self) -> GradeRowView {
        GradeRowView {
            subject: self.subject.clone(),
            assignment: self.assignment.clone(),
            grade: self.letter_grade.clone(),
            grade_class: format!("grade-value {}", grade_class(&self.letter_grade)),
            points: self.points_fraction.clone(),
            date: format_date(&self.date),
        }
    }
}

/// Activity feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateItemView {
    pub avatar: String,
    pub user: String,
    pub action: String,
    pub subject: String,
    pub time: String,
}

impl Render for UpdateEvent {
    type View = UpdateItemView;

    fn key(&self) -> String {
        format!("update-{}", self.id)
    }

    fn to_view(&self) -> UpdateItemView {
        UpdateItemView {
            avatar: self.user.chars().next().map(String::from).unwrap_or_default(),
            user: self.user.clone(),
            action: self.action.clone(),
            subject: self.subject.clone(),
            time: self.relative_time.clone(),
        }
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.user, self.action, self.subject)
    }
}

/// Today's schedule entry on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleItemView {
    pub time: String,
    pub subject: String,
    pub detail: String,
}

impl Render for ClassSession {
    type View = ScheduleItemView;

    fn key(&self) -> String {
        format!("session-{}-{}", self.time, self.subject)
    }

    fn to_view(&self) -> ScheduleItemView {
        ScheduleItemView {
            time: self.time.clone(),
            subject: self.subject.clone(),
            detail: format!("{} - {}", self.room, self.kind),
        }
    }
}

// =============================================================================
// DASHBOARD STATS
// =============================================================================

/// Dashboard stat cards, already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub total_classes: String,
    pub completed_tasks: String,
    pub pending_tasks: String,
    pub attendance: String,
    pub attendance_style: String,
}

impl Default for StatsView {
    fn default() -> Self {
        Self::from(DashboardStats {
            total_classes: 0,
            completed_tasks: 0,
            pending_tasks: 0,
            attendance_rate: 0,
        })
    }
}

impl From<DashboardStats> for StatsView {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_classes: stats.total_classes.to_string(),
            completed_tasks: stats.completed_tasks.to_string(),
            pending_tasks: stats.pending_tasks.to_string(),
            attendance: format!("{}%", stats.attendance_rate),
            attendance_style: progress_style(f64::from(stats.attendance_rate)),
        }
    }
}

// =============================================================================
// TIMETABLE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    TimeSlot,
    DayHeader,
    Class,
    Break,
}

impl CellKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::TimeSlot => "time-slot",
            Self::DayHeader => "day-header",
            Self::Class => "class-slot",
            Self::Break => "class-slot break",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableCell {
    pub text: String,
    pub kind: CellKind,
}

/// Row-major timetable grid including the header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimetableView {
    pub columns: usize,
    pub cells: Vec<TimetableCell>,
}

impl TimetableView {
    pub fn rows(&self) -> usize {
        if self.columns == 0 { 0 } else { self.cells.len() / self.columns }
    }
}

fn cell(text: &str, kind: CellKind) -> TimetableCell {
    TimetableCell { text: text.to_owned(), kind }
}

/// Lay out `table` as a grid: blank corner, day headers, then one row per slot.
pub fn timetable_view(table: &Timetable) -> TimetableView {
    let columns = table.days.len() + 1;
    let mut cells = Vec::with_capacity(columns * (table.time_slots.len() + 1));

    cells.push(cell("", CellKind::TimeSlot));
    cells.extend(table.days.iter().map(|day| cell(day, CellKind::DayHeader)));

    for time in &table.time_slots {
        cells.push(cell(time, CellKind::TimeSlot));
        for day in &table.days {
            let subject = table.subject_at(day, time);
            let kind = if subject == "Break" || subject == "Lunch" { CellKind::Break } else { CellKind::Class };
            cells.push(cell(subject, kind));
        }
    }

    TimetableView { columns, cells }
}
