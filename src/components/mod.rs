//! Shell components shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar, header, toast stack, and install button frame whichever page
//! is active. They read shared state from context and never own page data.

pub mod header;
pub mod install_button;
pub mod sidebar;
pub mod toast_stack;
