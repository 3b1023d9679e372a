//! Cross-cutting error types for Atlas.
//!
//! Domain-specific errors (e.g., `ContentError`, `SchemaError`) are defined in
//! their respective crates. Everything converges into `anyhow` in `atlas-cli`.

use thiserror::Error;

/// Errors that can be raised while building core values from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A slug string could not be turned into path segments.
    #[error("Invalid slug '{input}': {reason}")]
    InvalidSlug { input: String, reason: String },

    /// A section tag outside the closed set of section kinds.
    #[error("Unknown section type: {0}")]
    UnknownSectionKind(String),
}
