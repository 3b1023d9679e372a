//! Props payloads, one struct per section kind.
//!
//! Field names serialize in `camelCase` (`defaultValue`, `correctOption`).
//! Optional headings are omitted from output when unset.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder a playground template substitutes with the selected option.
pub const TEMPLATE_PLACEHOLDER: &str = "{value}";

/// Opening banner of a topic page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    pub heading: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Conceptual explanation with a list of key points.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MentalModelProps {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub feature: String,
    pub values: Vec<String>,
}

/// Side-by-side comparison. Every row carries one value per column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTableProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UtilityItem {
    /// Utility class, e.g. `grow-0`.
    pub class: String,
    pub description: String,
}

/// Reference grid of utility classes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UtilityGridProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub items: Vec<UtilityItem>,
}

/// Interactive picker over a fixed set of utility classes.
///
/// `template` is the markup shown for the selected option, with
/// [`TEMPLATE_PLACEHOLDER`] marking where the option goes. Rendering the live
/// preview belongs to the site renderer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<String>,
    pub default_value: String,
    pub template: String,
}

impl PlaygroundProps {
    /// Markup for `option`, or `None` if it is not one of `options`.
    #[must_use]
    pub fn build_markup(&self, option: &str) -> Option<String> {
        self.options
            .iter()
            .any(|candidate| candidate == option)
            .then(|| self.template.replace(TEMPLATE_PLACEHOLDER, option))
    }

    /// Markup for the default option.
    #[must_use]
    pub fn default_markup(&self) -> Option<String> {
        self.build_markup(&self.default_value)
    }
}

/// Quiz with a single correct option.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveChallengeProps {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl InteractiveChallengeProps {
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_option == answer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExampleItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub markup: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExamplesProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub items: Vec<ExampleItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MistakeItem {
    pub title: String,
    pub wrong: String,
    pub right: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommonMistakesProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub items: Vec<MistakeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipsProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground() -> PlaygroundProps {
        PlaygroundProps {
            heading: None,
            description: None,
            options: vec!["grow".into(), "grow-0".into()],
            default_value: "grow".into(),
            template: r#"<div class="flex"><div class="{value}">A</div></div>"#.into(),
        }
    }

    #[test]
    fn build_markup_substitutes_option() {
        let markup = playground().build_markup("grow-0").unwrap();
        assert_eq!(
            markup,
            r#"<div class="flex"><div class="grow-0">A</div></div>"#
        );
    }

    #[test]
    fn build_markup_rejects_unknown_option() {
        assert!(playground().build_markup("shrink").is_none());
    }

    #[test]
    fn default_markup_uses_default_value() {
        assert!(playground().default_markup().unwrap().contains(r#"class="grow""#));
    }

    #[test]
    fn props_use_camel_case_names() {
        let json = serde_json::to_value(playground()).unwrap();
        assert_eq!(json["defaultValue"], "grow");
        assert!(json.get("heading").is_none());
    }

    #[test]
    fn challenge_checks_answer() {
        let challenge = InteractiveChallengeProps {
            prompt: "Which class stops an item from growing?".into(),
            options: vec!["grow".into(), "grow-0".into()],
            correct_option: "grow-0".into(),
            explanation: None,
        };
        assert!(challenge.is_correct("grow-0"));
        assert!(!challenge.is_correct("grow"));
    }
}
