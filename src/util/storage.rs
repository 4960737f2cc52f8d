//! Persistence shim over the origin's key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only two values outlive a session: the profile (JSON) and the dark-mode
//! flag (`"true"`/`"false"`). Everything here is best-effort: a missing or
//! unparseable value reads as absent and callers fall back to defaults.
//!
//! `BrowserStorage` is the `localStorage` binding (csr only, a no-op
//! elsewhere). `MemoryStorage` backs tests and native builds.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::PortalError;
use crate::net::types::UserProfile;

pub const PROFILE_KEY: &str = "student_portal.user_data";
pub const DARK_MODE_KEY: &str = "student_portal.dark_mode";

/// String key-value store scoped to the app.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PortalError::Storage`] if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), PortalError>;

    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| PortalError::Storage("localStorage unavailable".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| PortalError::Storage(format!("{key}: {e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    leptos::logging::warn!("failed to remove {key}: {e:?}");
                }
            }
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortalError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PortalError::Storage(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Stored profile, or `None` if absent or corrupt.
pub fn stored_profile(store: &impl KeyValueStore) -> Option<UserProfile> {
    let raw = store.get(PROFILE_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            leptos::logging::warn!("ignoring corrupt stored profile: {e}");
            None
        }
    }
}

/// Stored profile, falling back to the default student.
pub fn load_profile(store: &impl KeyValueStore) -> UserProfile {
    stored_profile(store).unwrap_or_default()
}

pub fn save_profile(store: &impl KeyValueStore, profile: &UserProfile) {
    let raw = match serde_json::to_string(profile) {
        Ok(raw) => raw,
        Err(e) => {
            leptos::logging::warn!("profile not saved: {e}");
            return;
        }
    };
    if let Err(e) = store.set(PROFILE_KEY, &raw) {
        leptos::logging::warn!("profile not saved: {e}");
    }
}

/// `true` only when the stored flag is exactly `"true"`.
pub fn load_theme_flag(store: &impl KeyValueStore) -> bool {
    store.get(DARK_MODE_KEY).is_some_and(|v| v == "true")
}

/// Whether a theme preference has ever been stored.
pub fn has_theme_flag(store: &impl KeyValueStore) -> bool {
    store.get(DARK_MODE_KEY).is_some()
}

pub fn save_theme_flag(store: &impl KeyValueStore, enabled: bool) {
    if let Err(e) = store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" }) {
        leptos::logging::warn!("theme preference not saved: {e}");
    }
}

/// Forget the profile and theme flag (logout).
pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(PROFILE_KEY);
    store.remove(DARK_MODE_KEY);
}
