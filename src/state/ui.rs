//! Local UI chrome state (mobile menu, viewport, install prompt).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the page coordinator so the
//! responsive shell can evolve independently of page data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::config::PortalConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Slide-out sidebar open (mobile layout only).
    pub menu_open: bool,
    pub viewport_width: f64,
    /// A deferred install prompt is waiting for the user.
    pub install_available: bool,
    pub online: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            menu_open: false,
            viewport_width: 1024.0,
            install_available: false,
            online: true,
        }
    }
}

impl UiState {
    pub fn is_mobile(&self, config: &PortalConfig) -> bool {
        config.is_mobile(self.viewport_width)
    }

    /// Record a resize. Leaving the mobile layout closes the menu.
    pub fn set_viewport_width(&mut self, width: f64, config: &PortalConfig) {
        self.viewport_width = width;
        if !self.is_mobile(config) {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
