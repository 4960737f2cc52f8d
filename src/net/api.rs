//! Simulated backend endpoints.
//!
//! Client-side (csr): each call waits a fixed artificial delay with
//! `gloo-timers` before answering from the fixture source.
//! Native builds and tests answer immediately.
//!
//! ERROR HANDLING
//! ==============
//! Reads and writes always succeed; the only failure is asking for a read
//! endpoint path that does not exist.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::net::fixtures::{DataSource, Fixtures};
use crate::net::types::{PageData, PostResponse};
use crate::state::page::PageId;

/// Logical read endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    Classes,
    Tasks,
    Timetable,
    Grades,
}

impl Endpoint {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Classes, Self::Tasks, Self::Timetable, Self::Grades];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/api/dashboard",
            Self::Classes => "/api/classes",
            Self::Tasks => "/api/tasks",
            Self::Timetable => "/api/timetable",
            Self::Grades => "/api/grades",
        }
    }

    pub fn page(self) -> PageId {
        match self {
            Self::Dashboard => PageId::Dashboard,
            Self::Classes => PageId::Classes,
            Self::Tasks => PageId::Tasks,
            Self::Timetable => PageId::Timetable,
            Self::Grades => PageId::Grades,
        }
    }

    /// Resolve a request path.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownEndpoint`] for paths outside the read set.
    pub fn from_path(path: &str) -> Result<Self, PortalError> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.path() == path)
            .ok_or_else(|| PortalError::UnknownEndpoint(path.to_owned()))
    }
}

pub(crate) fn profile_endpoint() -> &'static str {
    "/api/profile"
}

pub(crate) fn task_action_endpoint(task_id: u32, action: &str) -> String {
    format!("/api/tasks/{task_id}/{action}")
}

/// Data-access interface the UI talks to. A real HTTP client can implement
/// this without the coordinator noticing.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// Read the records behind a logical endpoint.
    async fn fetch(&self, endpoint: Endpoint) -> PageData;

    /// Write `payload` to `path`.
    async fn post(&self, path: &str, payload: serde_json::Value) -> PostResponse;

    /// Read by raw path.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::UnknownEndpoint`] if `path` is not a read endpoint.
    async fn fetch_path(&self, path: &str) -> Result<PageData, PortalError> {
        let endpoint = Endpoint::from_path(path)?;
        Ok(self.fetch(endpoint).await)
    }
}

/// Fixture-backed API with fixed artificial latency.
#[derive(Clone, Copy, Debug)]
pub struct MockApi<S = Fixtures> {
    source: S,
    fetch_delay_ms: u64,
    post_delay_ms: u64,
}

impl<S: DataSource> MockApi<S> {
    pub fn new(source: S, config: &PortalConfig) -> Self {
        Self {
            source,
            fetch_delay_ms: config.fetch_delay_ms,
            post_delay_ms: config.post_delay_ms,
        }
    }
}

impl<S: DataSource> PortalApi for MockApi<S> {
    async fn fetch(&self, endpoint: Endpoint) -> PageData {
        simulate_latency(self.fetch_delay_ms).await;
        self.source.fixtures(endpoint.page())
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> PostResponse {
        simulate_latency(self.post_delay_ms).await;
        leptos::logging::log!("simulated write to {path}: {payload}");
        PostResponse {
            success: true,
            message: "Data updated successfully".to_owned(),
        }
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn simulate_latency(delay_ms: u64) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
    }
}
