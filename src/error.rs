//! Portal error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in the portal is fatal. Unknown identifiers come back as `Err` so
//! callers can log and ignore them; storage problems are reported but the
//! session always continues with defaults.

/// Errors surfaced by the portal's coordinator, provider, and simulated API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("unknown task filter: {0}")]
    UnknownFilter(String),
    #[error("endpoint not found: {0}")]
    UnknownEndpoint(String),
    #[error("storage error: {0}")]
    Storage(String),
}
