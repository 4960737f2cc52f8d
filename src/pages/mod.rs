//! One component per portal page.
//!
//! SYSTEM CONTEXT
//! ==============
//! All six pages are mounted once inside their `.page` sections; `App` toggles
//! the `active` class. Pages only draw containers that `PortalState` already
//! rendered.

pub mod classes;
pub mod dashboard;
pub mod grades;
pub mod settings;
pub mod tasks;
pub mod timetable;
