//! Client-side state containers shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state module owns one concern. `App` wraps them in `RwSignal`s and
//! provides them to pages and components; all of them are plain data so the
//! logic is testable without a browser.

pub mod page;
pub mod portal;
pub mod session;
pub mod toast;
pub mod ui;
