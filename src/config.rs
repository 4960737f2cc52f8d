//! Timing and layout configuration for the portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no environment to read from in the browser, so every tunable lives
//! here as a default constant. `App` provides one `PortalConfig` as context and
//! components read durations from it instead of hardcoding them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 100;
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 3_000;
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;
pub const DEFAULT_UPDATE_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 500;
pub const DEFAULT_POST_DELAY_MS: u64 = 1_000;
pub const DEFAULT_TASK_REFRESH_DELAY_MS: u64 = 500;
pub const DEFAULT_LOGOUT_RELOAD_DELAY_MS: u64 = 1_500;
pub const DEFAULT_SLOW_LOAD_WARN_MS: f64 = 3_000.0;
pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";

/// Toast lifecycle durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    /// Delay before a freshly queued toast slides in.
    pub enter_delay_ms: u64,
    /// Time from queueing until the exit animation starts.
    pub visible_ms: u64,
    /// Length of the exit animation before removal.
    pub exit_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

impl ToastTimings {
    /// Wait between the toast appearing and its exit animation.
    pub fn shown_ms(&self) -> u64 {
        self.visible_ms.saturating_sub(self.enter_delay_ms)
    }
}

/// Portal-wide configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub toast: ToastTimings,
    pub update_interval_secs: u64,
    pub mobile_breakpoint_px: f64,
    pub fetch_delay_ms: u64,
    pub post_delay_ms: u64,
    pub task_refresh_delay_ms: u64,
    pub logout_reload_delay_ms: u64,
    pub slow_load_warn_ms: f64,
    pub service_worker_path: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            toast: ToastTimings::default(),
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            post_delay_ms: DEFAULT_POST_DELAY_MS,
            task_refresh_delay_ms: DEFAULT_TASK_REFRESH_DELAY_MS,
            logout_reload_delay_ms: DEFAULT_LOGOUT_RELOAD_DELAY_MS,
            slow_load_warn_ms: DEFAULT_SLOW_LOAD_WARN_MS,
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Whether a viewport of `width_px` logical pixels gets the mobile layout.
    pub fn is_mobile(&self, width_px: f64) -> bool {
        width_px <= self.mobile_breakpoint_px
    }

    /// Whether a measured page load should be reported as slow.
    pub fn is_slow_load(&self, load_ms: f64) -> bool {
        load_ms > self.slow_load_warn_ms
    }
}
