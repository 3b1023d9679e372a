//! # atlas-schema
//!
//! JSON Schema generation, validation, and registry for Atlas content.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas describing content files
//! - Validation of arbitrary JSON against a named schema, with violations
//!   located by field path (`rows[0].feature`)
//! - Schema export for external tooling (`atlas schema` command, editor plugins)
//!
//! ## Architecture
//!
//! Content types are defined in `atlas-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! export layer. The published `topic` schema describes the strict section
//! shape; the loader in `atlas-content` stays lenient and reports the same
//! problems through its own validation pass.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, Violation};
