use anyhow::bail;
use atlas_content::{TopicRegistry, ValidationError};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Problem {
    code: &'static str,
    file: Option<String>,
    message: String,
    #[serde(flatten)]
    detail: ValidationError,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    topics: usize,
    problems: Vec<Problem>,
}

/// Handle `atlas validate`. Prints every problem, then fails if there were any.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = build(&ctx.registry);
    let count = response.problems.len();
    output(&response, flags.format)?;

    if count > 0 {
        bail!(
            "content validation failed: {count} problem(s) in {}",
            ctx.content_path.display()
        );
    }
    Ok(())
}

fn build(registry: &TopicRegistry) -> ValidateResponse {
    let problems: Vec<Problem> = registry
        .validate()
        .into_iter()
        .map(|error| Problem {
            code: error.code(),
            file: first_topic(&error)
                .and_then(|topic| registry.origin(topic))
                .map(|path| path.display().to_string()),
            message: error.to_string(),
            detail: error,
        })
        .collect();

    ValidateResponse {
        valid: problems.is_empty(),
        topics: registry.len(),
        problems,
    }
}

/// Topic a problem is attributed to when pointing at a file.
fn first_topic(error: &ValidationError) -> Option<usize> {
    match error {
        ValidationError::InvalidSlug { topic, .. }
        | ValidationError::EmptySections { topic, .. }
        | ValidationError::UnknownSectionType { topic, .. }
        | ValidationError::MalformedProps { topic, .. } => Some(*topic),
        ValidationError::DuplicateSlug { topics, .. } => topics.first().copied(),
    }
}

#[cfg(test)]
mod tests {
    use atlas_content::TopicRegistry;

    use super::build;

    #[test]
    fn clean_registry_is_valid() {
        let registry = TopicRegistry::from_json_str(
            r#"[{ "slug": ["flex", "grow"], "title": "Flex Grow",
                  "sections": [{ "type": "tips", "props": { "items": ["x"] } }] }]"#,
        )
        .expect("inline json should parse");

        let response = build(&registry);
        assert!(response.valid);
        assert_eq!(response.topics, 1);
    }

    #[test]
    fn problems_carry_code_and_detail() {
        let registry = TopicRegistry::from_json_str(
            r#"[
                { "slug": ["a"], "title": "A", "sections": [] },
                { "slug": ["a"], "title": "A again", "sections": [{ "type": "nope" }] }
            ]"#,
        )
        .expect("inline json should parse");

        let response = build(&registry);
        assert!(!response.valid);
        let codes: Vec<&str> = response.problems.iter().map(|p| p.code).collect();
        assert_eq!(
            codes,
            ["duplicate_slug", "empty_sections", "unknown_section_type"]
        );

        let json = serde_json::to_value(&response).expect("response serializes");
        assert_eq!(json["problems"][0]["error"], "duplicate_slug");
        assert_eq!(json["problems"][0]["topics"], serde_json::json!([0, 1]));
        assert!(json["problems"][2]["file"].is_null());
    }
}
