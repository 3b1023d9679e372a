//! Section types for topic pages.
//!
//! A topic page is a sequence of typed blocks. The set of block kinds is
//! closed: [`SectionKind`] lists the tags and [`Section`] carries one strongly
//! typed props payload per tag, so a renderer matching on `Section` is forced
//! to handle every kind.
//!
//! Serialized form is adjacently tagged:
//!
//! ```json
//! { "type": "playground", "props": { "options": ["grow", "grow-0"], ... } }
//! ```

mod props;

pub use props::{
    ComparisonRow, ComparisonTableProps, CommonMistakesProps, ExampleItem, ExamplesProps,
    HeroProps, InteractiveChallengeProps, MentalModelProps, MistakeItem, PlaygroundProps,
    TEMPLATE_PLACEHOLDER, TipsProps, UtilityGridProps, UtilityItem,
};

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// SectionKind
// ---------------------------------------------------------------------------

/// Tag of a section, as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    MentalModel,
    ComparisonTable,
    UtilityGrid,
    Playground,
    InteractiveChallenge,
    Examples,
    CommonMistakes,
    Tips,
}

impl SectionKind {
    pub const ALL: [Self; 9] = [
        Self::Hero,
        Self::MentalModel,
        Self::ComparisonTable,
        Self::UtilityGrid,
        Self::Playground,
        Self::InteractiveChallenge,
        Self::Examples,
        Self::CommonMistakes,
        Self::Tips,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::MentalModel => "mental-model",
            Self::ComparisonTable => "comparison-table",
            Self::UtilityGrid => "utility-grid",
            Self::Playground => "playground",
            Self::InteractiveChallenge => "interactive-challenge",
            Self::Examples => "examples",
            Self::CommonMistakes => "common-mistakes",
            Self::Tips => "tips",
        }
    }

    /// Look up a tag. Returns `None` for anything outside the closed set.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownSectionKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One typed block of a topic page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", content = "props", rename_all = "kebab-case")]
pub enum Section {
    Hero(HeroProps),
    MentalModel(MentalModelProps),
    ComparisonTable(ComparisonTableProps),
    UtilityGrid(UtilityGridProps),
    Playground(PlaygroundProps),
    InteractiveChallenge(InteractiveChallengeProps),
    Examples(ExamplesProps),
    CommonMistakes(CommonMistakesProps),
    Tips(TipsProps),
}

impl Section {
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        match self {
            Self::Hero(_) => SectionKind::Hero,
            Self::MentalModel(_) => SectionKind::MentalModel,
            Self::ComparisonTable(_) => SectionKind::ComparisonTable,
            Self::UtilityGrid(_) => SectionKind::UtilityGrid,
            Self::Playground(_) => SectionKind::Playground,
            Self::InteractiveChallenge(_) => SectionKind::InteractiveChallenge,
            Self::Examples(_) => SectionKind::Examples,
            Self::CommonMistakes(_) => SectionKind::CommonMistakes,
            Self::Tips(_) => SectionKind::Tips,
        }
    }
}

// ---------------------------------------------------------------------------
// SectionBlock
// ---------------------------------------------------------------------------

/// A section exactly as written, used when it does not parse as [`Section`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub props: serde_json::Value,
}

impl RawSection {
    /// Retry the strict parse, yielding the error that made it fall back.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for an unknown tag or mismatched props.
    pub fn reparse(&self) -> Result<Section, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "type": self.kind,
            "props": self.props,
        }))
    }
}

/// A loaded section: typed when it matches the contract, raw otherwise.
///
/// Reads never fail on a bad section; the registry's validation pass reports
/// `Unparsed` blocks as unknown types or malformed props, and `Invalid` ones
/// (not an object, or a non-string `type`) as unknown types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SectionBlock {
    Known(Section),
    Unparsed(RawSection),
    Invalid(serde_json::Value),
}

impl SectionBlock {
    #[must_use]
    pub const fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Known(section) => Some(section),
            Self::Unparsed(_) | Self::Invalid(_) => None,
        }
    }

    /// The `type` tag as written.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Known(section) => section.kind().as_str(),
            Self::Unparsed(raw) => &raw.kind,
            Self::Invalid(_) => "",
        }
    }

    /// Parsed kind, or `None` for a tag outside the closed set.
    #[must_use]
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            Self::Known(section) => Some(section.kind()),
            Self::Unparsed(raw) => SectionKind::parse(&raw.kind),
            Self::Invalid(_) => None,
        }
    }
}

impl From<Section> for SectionBlock {
    fn from(section: Section) -> Self {
        Self::Known(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_tags_roundtrip_through_parse() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.as_str().parse::<SectionKind>(), Ok(kind));
        }
    }

    #[test]
    fn kind_serializes_as_kebab_case() {
        let json = serde_json::to_value(SectionKind::InteractiveChallenge).unwrap();
        assert_eq!(json, "interactive-challenge");
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(SectionKind::parse("carousel"), None);
        assert_eq!(
            "carousel".parse::<SectionKind>(),
            Err(CoreError::UnknownSectionKind("carousel".into()))
        );
    }

    #[test]
    fn section_uses_adjacent_tagging() {
        let section = Section::Tips(TipsProps {
            heading: None,
            items: vec!["Prefer grow-0 over grow with a basis".into()],
        });
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "tips");
        assert_eq!(json["props"]["items"][0], "Prefer grow-0 over grow with a basis");
    }

    #[test]
    fn block_keeps_unknown_tag_raw() {
        let block: SectionBlock = serde_json::from_value(serde_json::json!({
            "type": "carousel",
            "props": { "slides": 3 }
        }))
        .unwrap();
        assert!(matches!(block, SectionBlock::Unparsed(_)));
        assert_eq!(block.tag(), "carousel");
        assert_eq!(block.kind(), None);
    }

    #[test]
    fn block_keeps_malformed_props_raw() {
        let block: SectionBlock = serde_json::from_value(serde_json::json!({
            "type": "playground",
            "props": { "options": ["grow"] }
        }))
        .unwrap();
        assert_eq!(block.kind(), Some(SectionKind::Playground));
        let SectionBlock::Unparsed(raw) = block else {
            panic!("expected raw block");
        };
        let error = raw.reparse().unwrap_err().to_string();
        assert!(error.contains("missing field"), "{error}");
    }

    #[test]
    fn block_parses_valid_section() {
        let block: SectionBlock = serde_json::from_value(serde_json::json!({
            "type": "hero",
            "props": { "heading": "Flex Grow", "body": "Fill the space." }
        }))
        .unwrap();
        assert_eq!(block.kind(), Some(SectionKind::Hero));
        assert!(block.as_section().is_some());
    }

    #[test]
    fn block_accepts_non_object_section() {
        let block: SectionBlock = serde_json::from_value(serde_json::json!("oops")).unwrap();
        assert_eq!(block, SectionBlock::Invalid(serde_json::json!("oops")));
        assert_eq!(block.kind(), None);
    }

    #[test]
    fn block_accepts_non_string_type() {
        let block: SectionBlock =
            serde_json::from_value(serde_json::json!({ "type": 5, "props": {} })).unwrap();
        assert!(matches!(block, SectionBlock::Invalid(_)));
        assert_eq!(block.tag(), "");
    }

    #[test]
    fn block_without_type_is_raw_with_empty_tag() {
        let block: SectionBlock =
            serde_json::from_value(serde_json::json!({ "props": {} })).unwrap();
        assert_eq!(block.tag(), "");
    }
}
