//! Portal records exchanged between the data source and the UI.
//!
//! DESIGN
//! ======
//! Field names serialize the way the portal's JSON payloads spell them
//! (`dueDate`, `class`, `in-progress`) so a real backend could answer with the
//! same shapes the fixtures use.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::page::PageId;

/// The signed-in student. Round-trips through `localStorage` as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "class")]
    pub class_label: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "STU001".to_owned(),
            name: "Alex Johnson".to_owned(),
            email: "alex.johnson@vit.edu".to_owned(),
            class_label: "Computer Science - Year 2".to_owned(),
        }
    }
}

/// Task workflow status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    Completed,
    InProgress,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Completed, Self::InProgress, Self::Overdue];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Overdue => "overdue",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency, drives the colored edge on task items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// An assignment or other piece of coursework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub subject: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO `YYYY-MM-DD`.
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: Priority,
}

/// An enrolled course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub id: u32,
    pub title: String,
    pub code: String,
    pub instructor: String,
    pub credits: u8,
    #[serde(rename = "attendance")]
    pub attendance_percent: u8,
    #[serde(rename = "assignments")]
    pub assignment_count: u32,
    #[serde(rename = "grade")]
    pub letter_grade: String,
}

/// One graded piece of work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub subject: String,
    pub assignment: String,
    #[serde(rename = "grade")]
    pub letter_grade: String,
    /// Points as displayed, e.g. `95/100`.
    #[serde(rename = "points")]
    pub points_fraction: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
}

/// A single occupied cell in the weekly timetable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
    pub subject: String,
}

/// Weekly grid of time slots by days plus the occupied slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub time_slots: Vec<String>,
    pub days: Vec<String>,
    pub schedule: Vec<ScheduleSlot>,
}

impl Timetable {
    /// Subject scheduled at `day`/`time`, or an empty string for a free slot.
    pub fn subject_at(&self, day: &str, time: &str) -> &str {
        self.schedule
            .iter()
            .find(|slot| slot.day == day && slot.time == time)
            .map_or("", |slot| slot.subject.as_str())
    }
}

/// Activity feed entry ("Dr. Smith assigned new task Mathematics").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub subject: String,
    #[serde(rename = "time")]
    pub relative_time: String,
}

/// A session on today's schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub time: String,
    pub subject: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Headline counters shown on the dashboard cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_classes: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub attendance_rate: u8,
}

/// Everything the dashboard page shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_tasks: Vec<Task>,
    pub recent_updates: Vec<UpdateEvent>,
    pub today_schedule: Vec<ClassSession>,
}

/// Records for one page, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageData {
    Dashboard(DashboardData),
    Classes(Vec<ClassRecord>),
    Tasks(Vec<Task>),
    Timetable(Timetable),
    Grades(Vec<GradeEntry>),
    Settings,
}

impl PageData {
    /// Page these records belong to.
    pub fn page(&self) -> PageId {
        match self {
            Self::Dashboard(_) => PageId::Dashboard,
            Self::Classes(_) => PageId::Classes,
            Self::Tasks(_) => PageId::Tasks,
            Self::Timetable(_) => PageId::Timetable,
            Self::Grades(_) => PageId::Grades,
            Self::Settings => PageId::Settings,
        }
    }

    /// Number of top-level records.
    pub fn len(&self) -> usize {
        match self {
            Self::Dashboard(data) => data.recent_tasks.len() + data.recent_updates.len() + data.today_schedule.len(),
            Self::Classes(items) => items.len(),
            Self::Tasks(items) => items.len(),
            Self::Timetable(table) => table.schedule.len(),
            Self::Grades(items) => items.len(),
            Self::Settings => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canned answer from the simulated write endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub success: bool,
    pub message: String,
}
