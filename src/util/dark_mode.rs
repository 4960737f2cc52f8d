//! Dark mode initialization and the theme indicator.
//!
//! Reads the stored preference through the persistence shim and applies a
//! `data-theme` attribute to the `<html>` element. Persisting a toggle is the
//! session's job; this module only reads and paints.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only behavior; native builds no-op so the logic stays testable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::{KeyValueStore, has_theme_flag, load_theme_flag};

/// Dark mode preference: the stored flag if one exists, otherwise the
/// system `prefers-color-scheme`.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    if has_theme_flag(store) {
        return load_theme_flag(store);
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                    leptos::logging::warn!("failed to apply theme: {e:?}");
                }
            }
        }
    }
}

pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Header toggle icon: offer the sun while dark, the moon while light.
pub fn theme_icon(enabled: bool) -> &'static str {
    if enabled { "fas fa-sun" } else { "fas fa-moon" }
}
