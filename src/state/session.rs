//! Signed-in student and theme preference for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that survives a reload. Every mutation writes through the
//! persistence shim so the next load sees it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;
use crate::util::dark_mode;
use crate::util::storage::{KeyValueStore, clear_session, save_profile, save_theme_flag, stored_profile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub profile: UserProfile,
    pub dark_mode: bool,
}

impl SessionState {
    /// Restore from storage. A missing or corrupt profile is replaced by the
    /// default student, which is written back so later loads agree.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let profile = stored_profile(store).unwrap_or_else(|| {
            let profile = UserProfile::default();
            save_profile(store, &profile);
            profile
        });
        Self {
            profile,
            dark_mode: dark_mode::read_preference(store),
        }
    }

    /// The profile the settings form would produce. Fields are trimmed and
    /// blank ones keep their previous value.
    pub fn edited_profile(&self, name: &str, email: &str) -> UserProfile {
        let mut profile = self.profile.clone();
        let name = name.trim();
        let email = email.trim();
        if !name.is_empty() {
            profile.name = name.to_owned();
        }
        if !email.is_empty() {
            profile.email = email.to_owned();
        }
        profile
    }

    /// Apply the settings form and persist the result.
    pub fn update_profile(&mut self, store: &impl KeyValueStore, name: &str, email: &str) {
        self.profile = self.edited_profile(name, email);
        save_profile(store, &self.profile);
    }

    /// Flip dark mode and persist it. Returns the new value.
    pub fn toggle_theme(&mut self, store: &impl KeyValueStore) -> bool {
        self.set_theme(store, !self.dark_mode);
        self.dark_mode
    }

    pub fn set_theme(&mut self, store: &impl KeyValueStore, enabled: bool) {
        self.dark_mode = enabled;
        save_theme_flag(store, enabled);
    }

    /// Forget the stored session. In-memory values reset to defaults.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        clear_session(store);
        *self = Self::default();
    }
}
