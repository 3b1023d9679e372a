//! Integration tests for the registry's integrity validation.

use std::path::{Path, PathBuf};

use atlas_content::{TopicRegistry, ValidationError};
use atlas_core::{Section, SectionKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load(name: &str) -> TopicRegistry {
    TopicRegistry::from_path(&fixture(name)).expect("fixture loads")
}

fn single_section(section: &str) -> TopicRegistry {
    TopicRegistry::from_json_str(&format!(
        r#"[{{ "slug": ["t"], "title": "T", "sections": [{section}] }}]"#
    ))
    .expect("inline json should parse")
}

#[test]
fn sample_content_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../content/topics.json");
    let registry = TopicRegistry::from_path(&path).expect("sample content loads");
    assert_eq!(registry.validate(), Vec::<ValidationError>::new());
}

#[test]
fn valid_fixture_has_no_problems() {
    assert!(load("flex.json").validate().is_empty());
}

#[test]
fn duplicate_place_self_is_reported() {
    let errors = load("place_self_duplicate.json").validate();
    assert_eq!(
        errors,
        vec![ValidationError::DuplicateSlug {
            slug: "alignment/place/self".into(),
            topics: vec![1, 2],
        }]
    );
}

#[test]
fn broken_fixture_reports_everything_in_order() {
    let errors = load("broken.json").validate();
    let codes: Vec<&str> = errors.iter().map(ValidationError::code).collect();
    assert_eq!(
        codes,
        [
            "invalid_slug",
            "duplicate_slug",
            "empty_sections",
            "unknown_section_type",
            "malformed_props",
            "malformed_props",
            "malformed_props",
            "malformed_props",
        ]
    );

    assert_eq!(
        errors[1],
        ValidationError::DuplicateSlug {
            slug: "tables/layout".into(),
            topics: vec![1, 4],
        }
    );
    assert_eq!(
        errors[3],
        ValidationError::UnknownSectionType {
            topic: 2,
            slug: "backgrounds/color".into(),
            section: 0,
            kind: "carousel".into(),
        }
    );

    let paths: Vec<(usize, usize, &str)> = errors
        .iter()
        .filter_map(|error| match error {
            ValidationError::MalformedProps {
                topic,
                section,
                path,
                ..
            } => Some((*topic, *section, path.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        paths,
        [
            (2, 1, "props.rows[1].values"),
            (2, 2, "props.defaultValue"),
            (2, 3, "props.defaultValue"),
            (3, 0, "props.correctOption"),
        ]
    );
}

#[test]
fn validation_is_idempotent() {
    let registry = load("broken.json");
    assert_eq!(registry.validate(), registry.validate());
}

#[test]
fn validation_does_not_change_reads() {
    let registry = load("broken.json");
    let before = registry.all().to_vec();
    let _ = registry.validate();
    assert_eq!(registry.all(), before.as_slice());
}

#[rstest]
#[case::empty_options(
    r#"{ "type": "playground", "props": { "options": [], "defaultValue": "a", "template": "{value}" } }"#,
    &["props.options", "props.defaultValue"]
)]
#[case::duplicate_option(
    r#"{ "type": "playground", "props": { "options": ["a", "a"], "defaultValue": "a", "template": "{value}" } }"#,
    &["props.options[1]"]
)]
#[case::template_without_placeholder(
    r#"{ "type": "playground", "props": { "options": ["a"], "defaultValue": "a", "template": "<div></div>" } }"#,
    &["props.template"]
)]
#[case::challenge_answer_missing(
    r#"{ "type": "interactive-challenge", "props": { "prompt": "?", "options": ["a", "b"], "correctOption": "c" } }"#,
    &["props.correctOption"]
)]
#[case::table_without_columns(
    r#"{ "type": "comparison-table", "props": { "columns": [], "rows": [] } }"#,
    &["props.columns"]
)]
#[case::ragged_row(
    r#"{ "type": "comparison-table", "props": { "columns": ["a", "b"], "rows": [{ "feature": "x", "values": ["1", "2", "3"] }] } }"#,
    &["props.rows[0].values"]
)]
#[case::empty_grid(r#"{ "type": "utility-grid", "props": { "items": [] } }"#, &["props.items"])]
#[case::empty_tips(r#"{ "type": "tips", "props": { "items": [] } }"#, &["props.items"])]
#[case::wrong_prop_type(r#"{ "type": "tips", "props": { "items": "one tip" } }"#, &["props.items"])]
#[case::wrong_typed_options(
    r#"{ "type": "playground", "props": { "options": "grow", "defaultValue": "grow", "template": "{value}" } }"#,
    &["props.options"]
)]
#[case::nested_missing_field(
    r#"{ "type": "comparison-table", "props": { "columns": ["a"], "rows": [{ "values": ["1"] }] } }"#,
    &["props.rows[0].feature"]
)]
#[case::mistake_without_reason(
    r#"{ "type": "common-mistakes", "props": { "items": [{ "title": "t", "wrong": "w", "right": "r" }] } }"#,
    &["props.items[0].reason"]
)]
#[case::props_not_an_object(r#"{ "type": "hero", "props": "Flex Grow" }"#, &["props"])]
#[case::missing_required_prop(r#"{ "type": "hero", "props": { "heading": "H" } }"#, &["props.body"])]
fn malformed_props_are_located(#[case] section: &str, #[case] expected: &[&str]) {
    let errors = single_section(section).validate();
    let paths: Vec<&str> = errors
        .iter()
        .map(|error| match error {
            ValidationError::MalformedProps { path, .. } => path.as_str(),
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(paths, expected);
}

#[test]
fn sections_that_are_not_objects_are_unknown_types() {
    let registry = TopicRegistry::from_json_str(
        r#"[
            { "slug": ["flex", "grow"], "title": "Flex Grow", "sections": ["oops", { "type": 5 }] },
            { "slug": ["flex", "shrink"], "title": "Flex Shrink", "sections": [{ "type": "tips", "props": { "items": ["x"] } }] }
        ]"#,
    )
    .expect("sections of any shape still load");

    assert_eq!(registry.get_by_path("flex/shrink").unwrap().title, "Flex Shrink");
    assert_eq!(
        registry.validate(),
        vec![
            ValidationError::UnknownSectionType {
                topic: 0,
                slug: "flex/grow".into(),
                section: 0,
                kind: String::new(),
            },
            ValidationError::UnknownSectionType {
                topic: 0,
                slug: "flex/grow".into(),
                section: 1,
                kind: "5".into(),
            },
        ]
    );
}

#[rstest]
#[case::empty_segment(r#"["flex", ""]"#)]
#[case::slash_in_segment(r#"["flex/grow"]"#)]
#[case::whitespace(r#"["flex grow"]"#)]
fn bad_slug_segments_are_reported(#[case] slug: &str) {
    let registry = TopicRegistry::from_json_str(&format!(
        r#"[{{ "slug": {slug}, "title": "T", "sections": [{{ "type": "tips", "props": {{ "items": ["x"] }} }}] }}]"#
    ))
    .expect("inline json should parse");

    let errors = registry.validate();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ValidationError::InvalidSlug { topic: 0, .. }));
}

#[test]
fn playground_defaults_are_members_of_options() {
    let registry = load("flex.json");
    for topic in registry.all() {
        for section in topic.known_sections() {
            if let Section::Playground(props) = section {
                assert!(props.options.contains(&props.default_value));
                assert!(props.default_markup().is_some());
            }
        }
    }
}

#[test]
fn malformed_props_display_names_the_location() {
    let errors = single_section(
        r#"{ "type": "interactive-challenge", "props": { "prompt": "?", "options": ["a"], "correctOption": "b" } }"#,
    )
    .validate();
    let message = errors[0].to_string();
    assert_eq!(
        message,
        "topic #0 (t) section #0 (interactive-challenge): props.correctOption: 'b' is not one of the options"
    );
    assert!(matches!(
        errors[0],
        ValidationError::MalformedProps {
            kind: SectionKind::InteractiveChallenge,
            ..
        }
    ));
}
