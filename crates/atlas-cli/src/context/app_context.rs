use std::path::{Path, PathBuf};

use anyhow::Context;
use atlas_config::AtlasConfig;
use atlas_content::{LoadOptions, TopicRegistry};

use crate::cli::GlobalFlags;

/// Everything a content command needs: resolved config and the loaded registry.
pub struct AppContext {
    pub config: AtlasConfig,
    pub content_path: PathBuf,
    pub registry: TopicRegistry,
}

impl AppContext {
    /// Load config for `project_root` and the topic registry it points at.
    ///
    /// `--content` wins over `content.path` from config and, like any other
    /// command-line path, is taken relative to the current directory.
    pub fn init(project_root: &Path, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = AtlasConfig::load_with_dotenv(project_root)
            .context("failed to load atlas configuration")?;

        let content_path = flags
            .content
            .as_deref()
            .map_or_else(|| config.content.resolve(project_root), PathBuf::from);

        tracing::debug!(
            root = %project_root.display(),
            content = %content_path.display(),
            "resolved content location"
        );

        let options = LoadOptions {
            follow_gitignore: config.content.follow_gitignore,
        };
        let registry = TopicRegistry::from_path_with(&content_path, options)
            .with_context(|| format!("failed to load content from {}", content_path.display()))?;

        Ok(Self {
            config,
            content_path,
            registry,
        })
    }
}
