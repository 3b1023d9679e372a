//! Integrity validation of loaded topics.
//!
//! The pass is total: every problem across every topic is collected, in a
//! deterministic order, instead of stopping at the first one. Order is
//! per-topic slug problems, then duplicate slugs, then section problems in
//! topic and section order.

use std::collections::HashMap;

use atlas_core::section::{
    ComparisonTableProps, InteractiveChallengeProps, PlaygroundProps, TEMPLATE_PLACEHOLDER,
};
use atlas_core::{RawSection, Section, SectionBlock, SectionKind, Topic};
use atlas_schema::SchemaRegistry;
use serde::Serialize;
use thiserror::Error;

/// One integrity problem. Topic and section positions are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("topic #{topic}: invalid slug '{slug}': {reason}")]
    InvalidSlug {
        topic: usize,
        slug: String,
        reason: String,
    },

    #[error("duplicate slug '{slug}' used by topics {topics:?}")]
    DuplicateSlug { slug: String, topics: Vec<usize> },

    #[error("topic #{topic} ({slug}): has no sections")]
    EmptySections { topic: usize, slug: String },

    #[error("topic #{topic} ({slug}) section #{section}: unknown section type '{kind}'")]
    UnknownSectionType {
        topic: usize,
        slug: String,
        section: usize,
        kind: String,
    },

    #[error("topic #{topic} ({slug}) section #{section} ({kind}): {path}: {reason}")]
    MalformedProps {
        topic: usize,
        slug: String,
        section: usize,
        kind: SectionKind,
        path: String,
        reason: String,
    },
}

impl ValidationError {
    /// Short machine name of the problem class.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSlug { .. } => "invalid_slug",
            Self::DuplicateSlug { .. } => "duplicate_slug",
            Self::EmptySections { .. } => "empty_sections",
            Self::UnknownSectionType { .. } => "unknown_section_type",
            Self::MalformedProps { .. } => "malformed_props",
        }
    }
}

/// Field path and reason for one props problem.
type PropsIssue = (String, String);

/// Validate `topics` and return every problem found.
#[must_use]
pub fn validate_topics(topics: &[Topic]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, topic) in topics.iter().enumerate() {
        if let Some(reason) = slug_problem(topic) {
            errors.push(ValidationError::InvalidSlug {
                topic: index,
                slug: topic.slug.path(),
                reason,
            });
        }
    }

    errors.extend(duplicate_slugs(topics));

    let schemas = SchemaRegistry::new()
        .inspect_err(|error| tracing::warn!(%error, "props schemas unavailable"))
        .ok();
    for (index, topic) in topics.iter().enumerate() {
        check_sections(index, topic, schemas.as_ref(), &mut errors);
    }

    errors
}

fn slug_problem(topic: &Topic) -> Option<String> {
    if topic.slug.is_empty() {
        return Some("slug has no segments".into());
    }

    topic
        .slug
        .segments()
        .iter()
        .enumerate()
        .find_map(|(position, segment)| {
            if segment.is_empty() {
                Some(format!("segment {position} is empty"))
            } else if segment.contains('/') {
                Some(format!("segment {position} ('{segment}') contains '/'"))
            } else if segment.chars().any(char::is_whitespace) {
                Some(format!("segment {position} ('{segment}') contains whitespace"))
            } else {
                None
            }
        })
}

/// One error per joined slug seen more than once, in first-appearance order.
fn duplicate_slugs(topics: &[Topic]) -> Vec<ValidationError> {
    let mut order: Vec<(String, Vec<usize>)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, topic) in topics.iter().enumerate() {
        if topic.slug.is_empty() {
            continue;
        }
        let path = topic.slug.path();
        match seen.get(&path) {
            Some(&position) => order[position].1.push(index),
            None => {
                seen.insert(path.clone(), order.len());
                order.push((path, vec![index]));
            }
        }
    }

    order
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .map(|(slug, topics)| ValidationError::DuplicateSlug { slug, topics })
        .collect()
}

fn check_sections(
    index: usize,
    topic: &Topic,
    schemas: Option<&SchemaRegistry>,
    errors: &mut Vec<ValidationError>,
) {
    let slug = topic.slug.path();

    if topic.sections.is_empty() {
        errors.push(ValidationError::EmptySections {
            topic: index,
            slug: slug.clone(),
        });
    }

    for (position, block) in topic.sections.iter().enumerate() {
        let (kind, issues) = match block {
            SectionBlock::Known(section) => (section.kind(), section_issues(section)),
            SectionBlock::Unparsed(raw) => {
                let Some(kind) = SectionKind::parse(&raw.kind) else {
                    errors.push(ValidationError::UnknownSectionType {
                        topic: index,
                        slug: slug.clone(),
                        section: position,
                        kind: raw.kind.clone(),
                    });
                    continue;
                };
                (kind, shape_issues(schemas, kind, raw))
            }
            SectionBlock::Invalid(value) => {
                errors.push(ValidationError::UnknownSectionType {
                    topic: index,
                    slug: slug.clone(),
                    section: position,
                    kind: value
                        .get("type")
                        .map_or_else(String::new, ToString::to_string),
                });
                continue;
            }
        };

        errors.extend(
            issues
                .into_iter()
                .map(|(path, reason)| ValidationError::MalformedProps {
                    topic: index,
                    slug: slug.clone(),
                    section: position,
                    kind,
                    path,
                    reason,
                }),
        );
    }
}

/// Locate shape problems of props that did not deserialize.
///
/// Paths come from the props schema of `kind`; the deserializer's own message
/// is the fallback when the schema finds nothing to point at.
fn shape_issues(
    schemas: Option<&SchemaRegistry>,
    kind: SectionKind,
    raw: &RawSection,
) -> Vec<PropsIssue> {
    let violations = schemas
        .and_then(|schemas| {
            schemas
                .violations(&SchemaRegistry::props_schema_name(kind), &raw.props)
                .ok()
        })
        .unwrap_or_default();

    if violations.is_empty() {
        let reason = match raw.reparse() {
            Err(error) => error.to_string(),
            Ok(_) => "does not match the section shape".to_string(),
        };
        return vec![("props".into(), reason)];
    }

    violations
        .into_iter()
        .map(|violation| (props_path(&violation.path), violation.message))
        .collect()
}

fn props_path(field: &str) -> String {
    if field.is_empty() {
        "props".into()
    } else {
        format!("props.{field}")
    }
}

fn section_issues(section: &Section) -> Vec<PropsIssue> {
    match section {
        Section::Hero(_) | Section::MentalModel(_) => Vec::new(),
        Section::ComparisonTable(props) => comparison_table_issues(props),
        Section::Playground(props) => playground_issues(props),
        Section::InteractiveChallenge(props) => challenge_issues(props),
        Section::UtilityGrid(props) => non_empty_items(props.items.len()),
        Section::Examples(props) => non_empty_items(props.items.len()),
        Section::CommonMistakes(props) => non_empty_items(props.items.len()),
        Section::Tips(props) => non_empty_items(props.items.len()),
    }
}

fn non_empty_items(len: usize) -> Vec<PropsIssue> {
    if len == 0 {
        vec![("props.items".into(), "must not be empty".into())]
    } else {
        Vec::new()
    }
}

fn comparison_table_issues(props: &ComparisonTableProps) -> Vec<PropsIssue> {
    let mut issues = Vec::new();
    if props.columns.is_empty() {
        issues.push(("props.columns".into(), "must not be empty".into()));
    }

    let expected = props.columns.len();
    for (row, entry) in props.rows.iter().enumerate() {
        if entry.values.len() != expected {
            issues.push((
                format!("props.rows[{row}].values"),
                format!(
                    "expected {expected} values (one per column), found {}",
                    entry.values.len()
                ),
            ));
        }
    }
    issues
}

fn playground_issues(props: &PlaygroundProps) -> Vec<PropsIssue> {
    let mut issues = option_issues(&props.options);
    if !props.options.contains(&props.default_value) {
        issues.push((
            "props.defaultValue".into(),
            format!("'{}' is not one of the options", props.default_value),
        ));
    }
    if !props.template.contains(TEMPLATE_PLACEHOLDER) {
        issues.push((
            "props.template".into(),
            format!("does not contain the {TEMPLATE_PLACEHOLDER} placeholder"),
        ));
    }
    issues
}

fn challenge_issues(props: &InteractiveChallengeProps) -> Vec<PropsIssue> {
    let mut issues = option_issues(&props.options);
    if !props.options.contains(&props.correct_option) {
        issues.push((
            "props.correctOption".into(),
            format!("'{}' is not one of the options", props.correct_option),
        ));
    }
    issues
}

fn option_issues(options: &[String]) -> Vec<PropsIssue> {
    if options.is_empty() {
        return vec![("props.options".into(), "must not be empty".into())];
    }

    options
        .iter()
        .enumerate()
        .filter(|&(position, option)| options[..position].contains(option))
        .map(|(position, option)| {
            (
                format!("props.options[{position}]"),
                format!("duplicate option '{option}'"),
            )
        })
        .collect()
}
