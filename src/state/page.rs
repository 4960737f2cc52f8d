//! Page identifiers and the task filter vocabulary.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use crate::error::PortalError;
use crate::net::types::TaskStatus;

/// One of the six portal pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Dashboard,
    Classes,
    Tasks,
    Timetable,
    Grades,
    Settings,
}

impl PageId {
    /// Sidebar order; also the order of the `1`..`6` shortcuts.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Classes,
        Self::Tasks,
        Self::Timetable,
        Self::Grades,
        Self::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Classes => "classes",
            Self::Tasks => "tasks",
            Self::Timetable => "timetable",
            Self::Grades => "grades",
            Self::Settings => "settings",
        }
    }

    /// Header title shown while the page is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Classes => "My Classes",
            Self::Tasks => "Tasks",
            Self::Timetable => "Timetable",
            Self::Grades => "Grades",
            Self::Settings => "Settings",
        }
    }

    /// Font Awesome icon used in the sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "fas fa-home",
            Self::Classes => "fas fa-chalkboard-teacher",
            Self::Tasks => "fas fa-tasks",
            Self::Timetable => "fas fa-calendar-alt",
            Self::Grades => "fas fa-chart-line",
            Self::Settings => "fas fa-cog",
        }
    }

    /// Page bound to digit key `digit` (`'1'` is the dashboard).
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// DOM id of the page container, e.g. `tasks-page`.
    pub fn container_id(self) -> String {
        format!("{}-page", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = PortalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == raw)
            .ok_or_else(|| PortalError::UnknownPage(raw.to_owned()))
    }
}

/// Task list filter: a status or the `all` wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    /// Filter buttons in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Status(TaskStatus::Pending),
        Self::Status(TaskStatus::InProgress),
        Self::Status(TaskStatus::Completed),
        Self::Status(TaskStatus::Overdue),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Status(status) => status.as_str(),
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(TaskStatus::Pending) => "Pending",
            Self::Status(TaskStatus::InProgress) => "In Progress",
            Self::Status(TaskStatus::Completed) => "Completed",
            Self::Status(TaskStatus::Overdue) => "Overdue",
        }
    }

    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Status(wanted) => wanted == status,
        }
    }
}

impl FromStr for TaskFilter {
    type Err = PortalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "all" {
            return Ok(Self::All);
        }
        TaskStatus::parse(raw)
            .map(Self::Status)
            .ok_or_else(|| PortalError::UnknownFilter(raw.to_owned()))
    }
}
