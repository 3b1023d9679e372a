use atlas_content::TopicRegistry;
use atlas_core::Topic;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TopicRow {
    slug: String,
    title: String,
    category: Option<String>,
    sections: usize,
}

impl From<&Topic> for TopicRow {
    fn from(topic: &Topic) -> Self {
        Self {
            slug: topic.slug.path(),
            title: topic.title.clone(),
            category: topic.category().map(str::to_string),
            sections: topic.sections.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TopicListResponse {
    total: usize,
    topics: Vec<TopicRow>,
}

/// Handle `atlas list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = build(&ctx.registry, args.category.as_deref(), limit);
    output(&response, flags.format)
}

fn build(registry: &TopicRegistry, category: Option<&str>, limit: usize) -> TopicListResponse {
    let matching: Vec<&Topic> = match category {
        Some(category) => registry.by_category(category),
        None => registry.all().iter().collect(),
    };

    TopicListResponse {
        total: matching.len(),
        topics: matching.into_iter().take(limit).map(TopicRow::from).collect(),
    }
}
