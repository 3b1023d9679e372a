//! Errors raised while building or applying the content schemas.

use thiserror::Error;

/// Errors from [`SchemaRegistry`](crate::SchemaRegistry).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name (see `atlas schema`).
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A topic, section, or props value does not match its schema.
    #[error("Content does not match schema: {errors:?}")]
    ValidationFailed { errors: Vec<String> },

    /// A content type's schema could not be serialized or compiled.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
