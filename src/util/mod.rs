//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence, theme, shortcut resolution, and raw browser access. Each
//! helper compiles natively with an inert fallback so state logic can be
//! tested without a window.

pub mod browser;
pub mod dark_mode;
pub mod shortcuts;
pub mod storage;
