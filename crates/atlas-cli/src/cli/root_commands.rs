use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List topics in registry order.
    List(ListArgs),
    /// Show one topic by slug.
    Show(ShowArgs),
    /// List categories with topic counts.
    Categories,
    /// Check content integrity; exits non-zero when problems are found.
    Validate,
    /// List schema names, or dump the JSON schema for one.
    Schema(SchemaArgs),
    /// Render playground markup for a topic.
    Markup(MarkupArgs),
}

/// Arguments for `atlas list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Only topics in this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `atlas show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Topic slug as a path (`flex/grow`) or as separate segments (`flex grow`).
    #[arg(required = true, num_args = 1..)]
    pub slug: Vec<String>,
}

/// Arguments for `atlas schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `topic`, `playground_props`). Lists names when omitted.
    pub name: Option<String>,
}

/// Arguments for `atlas markup`.
#[derive(Clone, Debug, Args)]
pub struct MarkupArgs {
    /// Topic slug as a path (`flex/grow`) or as separate segments (`flex grow`).
    #[arg(required = true, num_args = 1..)]
    pub slug: Vec<String>,
    /// Option to render instead of each playground's default.
    #[arg(long)]
    pub option: Option<String>,
}
