use anyhow::bail;
use atlas_core::{Section, Topic};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MarkupArgs;
use crate::commands::shared::slug::lookup;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PlaygroundMarkup {
    section: usize,
    option: String,
    markup: String,
}

#[derive(Debug, Serialize)]
struct MarkupResponse {
    slug: String,
    playgrounds: Vec<PlaygroundMarkup>,
}

/// Handle `atlas markup`.
pub fn handle(args: &MarkupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = lookup(&ctx.registry, &args.slug)?;
    let response = build(topic, args.option.as_deref())?;
    output(&response, flags.format)
}

fn build(topic: &Topic, option: Option<&str>) -> anyhow::Result<MarkupResponse> {
    let mut playgrounds = Vec::new();

    for (position, block) in topic.sections.iter().enumerate() {
        let Some(Section::Playground(props)) = block.as_section() else {
            continue;
        };

        let option = option.unwrap_or(&props.default_value);
        let Some(markup) = props.build_markup(option) else {
            bail!(
                "'{option}' is not an option of playground #{position} in {} (options: {})",
                topic.slug,
                props.options.join(", ")
            );
        };

        playgrounds.push(PlaygroundMarkup {
            section: position,
            option: option.to_string(),
            markup,
        });
    }

    if playgrounds.is_empty() {
        bail!("topic {} has no playground sections", topic.slug);
    }

    Ok(MarkupResponse {
        slug: topic.slug.path(),
        playgrounds,
    })
}

#[cfg(test)]
mod tests {
    use atlas_content::TopicRegistry;
    use pretty_assertions::assert_eq;

    use super::build;

    fn registry() -> TopicRegistry {
        TopicRegistry::from_json_str(
            r#"[
                {
                    "slug": ["flex", "grow"],
                    "title": "Flex Grow",
                    "sections": [
                        { "type": "hero", "props": { "heading": "Flex Grow", "body": "..." } },
                        {
                            "type": "playground",
                            "props": {
                                "options": ["grow", "grow-0"],
                                "defaultValue": "grow",
                                "template": "<div class=\"{value}\"></div>"
                            }
                        }
                    ]
                },
                { "slug": ["flex", "shrink"], "title": "Flex Shrink" }
            ]"#,
        )
        .expect("inline json should parse")
    }

    #[test]
    fn renders_default_option() {
        let registry = registry();
        let topic = registry.get_by_path("flex/grow").unwrap();
        let response = build(topic, None).unwrap();
        assert_eq!(response.playgrounds.len(), 1);
        assert_eq!(response.playgrounds[0].section, 1);
        assert_eq!(response.playgrounds[0].markup, r#"<div class="grow"></div>"#);
    }

    #[test]
    fn renders_requested_option() {
        let registry = registry();
        let topic = registry.get_by_path("flex/grow").unwrap();
        let response = build(topic, Some("grow-0")).unwrap();
        assert_eq!(response.playgrounds[0].option, "grow-0");
    }

    #[test]
    fn rejects_unknown_option() {
        let registry = registry();
        let topic = registry.get_by_path("flex/grow").unwrap();
        let error = build(topic, Some("shrink")).unwrap_err().to_string();
        assert!(error.contains("grow, grow-0"), "{error}");
    }

    #[test]
    fn topic_without_playground_is_an_error() {
        let registry = registry();
        let topic = registry.get_by_path("flex/shrink").unwrap();
        assert!(build(topic, None).is_err());
    }
}
