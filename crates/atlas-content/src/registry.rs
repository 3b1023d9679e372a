//! The topic registry.
//!
//! Built once at load time and never mutated afterwards; every read is a
//! plain lookup over the loaded topics.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use atlas_core::{Slug, Topic};
use serde::Serialize;

use crate::error::ContentError;
use crate::loader::{self, ContentFormat, LoadOptions};
use crate::validate::{ValidationError, validate_topics};

/// A category and the number of topics listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub topics: usize,
}

/// Ordered, immutable collection of topics.
#[derive(Debug, Clone, Default)]
pub struct TopicRegistry {
    topics: Vec<Topic>,
    /// File each topic was read from, parallel to `topics`.
    origins: Vec<Option<PathBuf>>,
    /// Slug to first topic index with that slug.
    index: HashMap<Slug, usize>,
}

impl TopicRegistry {
    /// Build a registry from topics already in memory.
    #[must_use]
    pub fn new(topics: Vec<Topic>) -> Self {
        let origins = vec![None; topics.len()];
        Self::with_origins(topics, origins)
    }

    fn with_origins(topics: Vec<Topic>, origins: Vec<Option<PathBuf>>) -> Self {
        let mut index = HashMap::with_capacity(topics.len());
        for (position, topic) in topics.iter().enumerate() {
            index.entry(topic.slug.clone()).or_insert(position);
        }
        Self {
            topics,
            origins,
            index,
        }
    }

    /// Load a content file or directory with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        Self::from_path_with(path, LoadOptions::default())
    }

    /// Load a content file or directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a file cannot be read or parsed, or the
    /// directory cannot be walked.
    pub fn from_path_with(path: &Path, options: LoadOptions) -> Result<Self, ContentError> {
        let files = loader::load_path(path, options)?;

        let mut topics = Vec::new();
        let mut origins = Vec::new();
        for file in &files {
            origins.extend(std::iter::repeat_n(Some(file.path.clone()), file.topics.len()));
        }
        for file in files {
            topics.extend(file.topics);
        }

        tracing::info!(
            path = %path.display(),
            topics = topics.len(),
            "loaded topic registry"
        );

        Ok(Self::with_origins(topics, origins))
    }

    /// Build a registry from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` if the text is not valid JSON content.
    pub fn from_json_str(input: &str) -> Result<Self, ContentError> {
        Self::from_str_as(input, ContentFormat::Json)
    }

    /// Build a registry from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` if the text is not valid TOML content.
    pub fn from_toml_str(input: &str) -> Result<Self, ContentError> {
        Self::from_str_as(input, ContentFormat::Toml)
    }

    fn from_str_as(input: &str, format: ContentFormat) -> Result<Self, ContentError> {
        loader::parse_str(input, format)
            .map(Self::new)
            .map_err(|message| ContentError::Parse {
                path: PathBuf::from("<inline>"),
                format,
                message,
            })
    }

    /// Every topic, in registry order.
    #[must_use]
    pub fn all(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Exact, order-sensitive slug lookup. When several topics share a slug
    /// the first in registry order is returned.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if no topic has this slug.
    pub fn get_by_slug<S: AsRef<str>>(&self, slug: &[S]) -> Result<&Topic, ContentError> {
        let key = Slug::new(slug.iter().map(<S as AsRef<str>>::as_ref));
        self.index
            .get(&key)
            .map(|&position| &self.topics[position])
            .ok_or_else(|| ContentError::NotFound { slug: key.path() })
    }

    /// Lookup by joined path, e.g. `flex/grow`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if the path is malformed or no topic
    /// has this slug.
    pub fn get_by_path(&self, path: &str) -> Result<&Topic, ContentError> {
        match Slug::parse(path) {
            Ok(slug) => self.get_by_slug(slug.segments()),
            Err(_) => Err(ContentError::NotFound {
                slug: path.to_string(),
            }),
        }
    }

    /// Topics listed under `category`, in registry order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Topic> {
        self.topics
            .iter()
            .filter(|topic| topic.category() == Some(category))
            .collect()
    }

    /// Categories in order of first appearance, with topic counts.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for category in self.topics.iter().filter_map(Topic::category) {
            match summaries.iter_mut().find(|summary| summary.name == category) {
                Some(summary) => summary.topics += 1,
                None => summaries.push(CategorySummary {
                    name: category.to_string(),
                    topics: 1,
                }),
            }
        }
        summaries
    }

    /// File the topic at `position` was loaded from, if any.
    #[must_use]
    pub fn origin(&self, position: usize) -> Option<&Path> {
        self.origins.get(position)?.as_deref()
    }

    /// Run the integrity checks and return every problem found.
    ///
    /// Does not modify the registry; running it twice yields the same list.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let errors = validate_topics(&self.topics);
        if errors.is_empty() {
            tracing::debug!(topics = self.topics.len(), "content validation passed");
        } else {
            tracing::warn!(
                topics = self.topics.len(),
                problems = errors.len(),
                "content validation found problems"
            );
        }
        errors
    }
}
