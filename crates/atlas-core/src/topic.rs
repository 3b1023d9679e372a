//! Topic records: one page per CSS utility family.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::section::{Section, SectionBlock};
use crate::slug::Slug;

/// One documented utility family, e.g. "Flex Grow".
///
/// `sections` are rendered top to bottom in the order given. A topic loaded
/// from content keeps its sections as [`SectionBlock`]s so that a section with
/// an unknown tag or malformed props is still readable; the published schema
/// describes the strict [`Section`] shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Topic {
    pub slug: Slug,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Explicit category. Falls back to the first slug segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    #[schemars(with = "Vec<Section>")]
    pub sections: Vec<SectionBlock>,
}

impl Topic {
    /// Category the topic is listed under.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .or_else(|| self.slug.first())
    }

    /// Sections that parsed into a known variant, in display order.
    pub fn known_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter_map(SectionBlock::as_section)
    }
}

/// Top-level shape of a content file: `{ "topics": [...] }` or `[[topics]]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopicDocument {
    #[serde(default)]
    pub topics: Vec<Topic>,
}
