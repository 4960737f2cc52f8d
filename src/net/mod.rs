//! Data modules: record types, fixture source, and the simulated API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the records, `fixtures` supplies them per page, and `api`
//! wraps the fixtures behind endpoint-shaped calls with artificial latency.

pub mod api;
pub mod fixtures;
pub mod types;
