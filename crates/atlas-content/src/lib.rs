//! # atlas-content
//!
//! The topic registry for Atlas.
//!
//! This crate provides:
//! - `TopicRegistry`: the ordered, immutable list of topics with lookup by slug
//!   and by category
//! - Loading of JSON and TOML content files, singly or from a directory tree
//! - `validate()`, the exhaustive integrity pass a build step runs before
//!   publishing content
//!
//! ## Failure model
//!
//! Reads never fail on odd content: a topic with an unknown section type or
//! malformed props is returned as loaded. Only I/O and syntax problems fail a
//! load. Integrity problems are collected by [`TopicRegistry::validate`], which
//! reports every problem in one pass.

mod error;
mod loader;
mod registry;
mod validate;

pub use error::ContentError;
pub use loader::{ContentFormat, LoadOptions, parse_str};
pub use registry::{CategorySummary, TopicRegistry};
pub use validate::{ValidationError, validate_topics};
