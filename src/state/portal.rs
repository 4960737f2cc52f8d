//! Page-state coordinator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns which page is active and the rendered containers for every page.
//! Navigation pulls records from the `DataSource` and re-renders; filter and
//! search only flip item visibility. Lives in a single `RwSignal` on the main
//! thread, so no locking is involved.
//!
//! Filter and search are last-applied-wins: applying one resets the other.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::sync::Arc;

use time::{Date, Duration};

use crate::error::PortalError;
use crate::net::fixtures::{DataSource, Fixtures};
use crate::net::types::{DashboardData, PageData};
use crate::render::Container;
use crate::render::views::{
    ClassCardView, GradeRowView, RecentTaskRow, RecentTaskView, ScheduleItemView, StatsView, TaskItemView,
    TimetableView, UpdateItemView, timetable_view, week_label,
};
use crate::state::page::{PageId, TaskFilter};

#[derive(Clone)]
pub struct PortalState {
    source: Arc<dyn DataSource>,
    active: PageId,
    task_filter: TaskFilter,
    search_query: String,
    selected_date: Date,
    week_of: Date,
    pub stats: StatsView,
    pub recent_tasks: Container<RecentTaskView>,
    pub recent_updates: Container<UpdateItemView>,
    pub today_schedule: Container<ScheduleItemView>,
    pub classes: Container<ClassCardView>,
    pub tasks: Container<TaskItemView>,
    pub timetable: TimetableView,
    pub grades: Container<GradeRowView>,
}

impl PortalState {
    /// Start on the dashboard, rendered from `source`.
    pub fn new(source: Arc<dyn DataSource>, today: Date) -> Self {
        let mut state = Self {
            source,
            active: PageId::Dashboard,
            task_filter: TaskFilter::All,
            search_query: String::new(),
            selected_date: today,
            week_of: today,
            stats: StatsView::default(),
            recent_tasks: Container::new("recent-tasks"),
            recent_updates: Container::new("recent-updates"),
            today_schedule: Container::new("today-schedule"),
            classes: Container::new("classes-grid"),
            tasks: Container::new("all-tasks"),
            timetable: TimetableView::default(),
            grades: Container::new("grades-list"),
        };
        state.render_page(PageId::Dashboard);
        state
    }

    /// Coordinator backed by the inline demo fixtures.
    pub fn with_fixtures(today: Date) -> Self {
        Self::new(Arc::new(Fixtures), today)
    }

    pub fn active_page(&self) -> PageId {
        self.active
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }

    /// Header title for the active page.
    pub fn title(&self) -> &'static str {
        self.active.title()
    }

    pub fn task_filter(&self) -> TaskFilter {
        self.task_filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_date(&self) -> Date {
        self.selected_date
    }

    pub fn week_label(&self) -> String {
        week_label(self.week_of)
    }

    pub fn pending_task_count(&self) -> &str {
        &self.stats.pending_tasks
    }

    /// Switch pages: activate `page`, fetch its records, render them.
    /// Resets the task filter and search.
    pub fn navigate(&mut self, page: PageId) {
        self.active = page;
        self.task_filter = TaskFilter::All;
        self.search_query.clear();
        self.render_page(page);
    }

    /// Navigate by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownPage`] and leaves the state untouched if
    /// `raw` is not a page identifier.
    pub fn navigate_to(&mut self, raw: &str) -> Result<(), PortalError> {
        let page: PageId = raw.parse()?;
        self.navigate(page);
        Ok(())
    }

    fn render_page(&mut self, page: PageId) {
        let data = self.source.fixtures(page);
        self.render_data(data);
    }

    fn render_data(&mut self, data: PageData) {
        match data {
            PageData::Dashboard(data) => self.render_dashboard(&data),
            PageData::Classes(records) => self.classes.render(records.iter()),
            PageData::Tasks(records) => self.tasks.render(records.iter()),
            PageData::Timetable(table) => self.timetable = timetable_view(&table),
            PageData::Grades(records) => self.grades.render(records.iter()),
            PageData::Settings => {}
        }
    }

    fn render_dashboard(&mut self, data: &DashboardData) {
        self.stats = StatsView::from(data.stats);
        self.recent_tasks.render(data.recent_tasks.iter().map(RecentTaskRow));
        self.recent_updates.render(data.recent_updates.iter());
        self.today_schedule.render(data.today_schedule.iter());
    }

    /// Filter rendered tasks by status value or `all`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownFilter`] and changes nothing if `raw` is
    /// outside the status vocabulary.
    pub fn filter_tasks(&mut self, raw: &str) -> Result<(), PortalError> {
        let filter: TaskFilter = raw.parse()?;
        self.apply_filter(filter);
        Ok(())
    }

    pub fn apply_filter(&mut self, filter: TaskFilter) {
        self.task_filter = filter;
        self.search_query.clear();
        self.tasks.set_visibility(|item| filter.matches(item.view.status));
    }

    /// Case-insensitive search over the active page's searchable items
    /// (task items, class cards, activity feed). Empty query shows all.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.search_query);
        self.task_filter = TaskFilter::All;
        match self.active {
            PageId::Tasks => self.tasks.apply_search(query),
            PageId::Classes => self.classes.apply_search(query),
            PageId::Dashboard => self.recent_updates.apply_search(query),
            PageId::Timetable | PageId::Grades | PageId::Settings => {}
        }
    }

    /// Date picker change: reload the dashboard for `date`.
    pub fn set_date(&mut self, date: Date) {
        self.selected_date = date;
        self.render_page(PageId::Dashboard);
        if self.active == PageId::Dashboard && !self.search_query.is_empty() {
            self.recent_updates.apply_search(&self.search_query);
        }
    }

    /// Move the timetable by whole weeks and reload it.
    pub fn shift_week(&mut self, weeks: i64) {
        if let Some(next) = self.week_of.checked_add(Duration::weeks(weeks)) {
            self.week_of = next;
        }
        self.render_page(PageId::Timetable);
    }

    /// Re-fetch the active page and the dashboard, keeping the current filter
    /// or search in effect.
    pub fn refresh(&mut self) {
        self.render_page(self.active);
        if self.active != PageId::Dashboard {
            self.render_page(PageId::Dashboard);
        }
        self.reapply_view();
    }

    /// Render records fetched through the API, keeping the current filter or
    /// search in effect.
    pub fn apply_fetched(&mut self, data: PageData) {
        self.render_data(data);
        self.reapply_view();
    }

    fn reapply_view(&mut self) {
        if self.search_query.is_empty() {
            self.apply_filter(self.task_filter);
        } else {
            let query = self.search_query.clone();
            self.search(&query);
        }
    }
}
