//! # portal
//!
//! Leptos + WASM student portal: a single-page dashboard with classes, tasks,
//! timetable, grades, and settings, served entirely from inline demo data.
//!
//! The domain logic (`net`, `render`, `state`, `util`) is plain Rust and is
//! tested natively. `app`, `components`, and `pages` draw it with Leptos; the
//! browser entry point below is compiled only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod render;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("student portal starting");
    leptos::mount::mount_to_body(app::App);
}
