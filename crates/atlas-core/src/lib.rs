//! # atlas-core
//!
//! Core content types and error types for Atlas.
//!
//! This crate provides the foundational types shared across all Atlas crates:
//! - `Slug`, the routing key of a topic
//! - `Topic` and `TopicDocument`, the records a content file holds
//! - The closed `Section` sum type with one props struct per section kind
//! - `SectionBlock`, the lenient form a loaded section is kept in
//! - Cross-cutting error types

pub mod errors;
pub mod section;
pub mod slug;
pub mod topic;

pub use errors::CoreError;
pub use section::{RawSection, Section, SectionBlock, SectionKind};
pub use slug::Slug;
pub use topic::{Topic, TopicDocument};
