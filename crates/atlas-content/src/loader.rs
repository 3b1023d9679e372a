//! Reading topics from JSON and TOML content files.
//!
//! A JSON file holds either a bare array of topics or `{ "topics": [...] }`.
//! A TOML file holds `[[topics]]` tables. Directories are walked recursively
//! (respecting `.gitignore`) and files are read in path order, so the
//! resulting topic order is deterministic.

use std::fmt;
use std::path::{Path, PathBuf};

use atlas_core::{Topic, TopicDocument};
use ignore::WalkBuilder;

use crate::error::ContentError;

/// On-disk content format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Toml,
}

impl ContentFormat {
    /// Format for `path`, or `None` when the extension is not a content one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Self::Toml)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for loading a content directory.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Skip files matched by `.gitignore`/`.ignore` files in the tree.
    pub follow_gitignore: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            follow_gitignore: true,
        }
    }
}

/// Topics read from one file.
#[derive(Debug)]
pub(crate) struct LoadedFile {
    pub path: PathBuf,
    pub topics: Vec<Topic>,
}

/// Parse content text in the given format.
///
/// # Errors
///
/// Returns the parser's message when the text is not valid content.
pub fn parse_str(input: &str, format: ContentFormat) -> Result<Vec<Topic>, String> {
    match format {
        ContentFormat::Json => {
            if input.trim_start().starts_with('[') {
                serde_json::from_str::<Vec<Topic>>(input).map_err(|e| e.to_string())
            } else {
                serde_json::from_str::<TopicDocument>(input)
                    .map(|doc| doc.topics)
                    .map_err(|e| e.to_string())
            }
        }
        ContentFormat::Toml => toml::from_str::<TopicDocument>(input)
            .map(|doc| doc.topics)
            .map_err(|e| e.to_string()),
    }
}

/// Load a single content file.
pub(crate) fn load_file(path: &Path) -> Result<LoadedFile, ContentError> {
    let format = ContentFormat::from_path(path).ok_or_else(|| ContentError::Parse {
        path: path.to_path_buf(),
        format: ContentFormat::Json,
        message: "unsupported file extension (expected .json or .toml)".into(),
    })?;

    let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let topics = parse_str(&source, format).map_err(|message| ContentError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    })?;

    tracing::debug!(path = %path.display(), topics = topics.len(), "loaded content file");

    Ok(LoadedFile {
        path: path.to_path_buf(),
        topics,
    })
}

/// Load a content file, or every content file under a directory.
pub(crate) fn load_path(path: &Path, options: LoadOptions) -> Result<Vec<LoadedFile>, ContentError> {
    let metadata = std::fs::metadata(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_file() {
        return Ok(vec![load_file(path)?]);
    }

    content_files(path, options)?
        .iter()
        .map(|file| load_file(file))
        .collect()
}

/// Content files under `root`, sorted by path.
fn content_files(root: &Path, options: LoadOptions) -> Result<Vec<PathBuf>, ContentError> {
    let walker = WalkBuilder::new(root)
        .git_ignore(options.follow_gitignore)
        .ignore(options.follow_gitignore)
        .git_global(false)
        .git_exclude(false)
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e: ignore::Error| ContentError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if ContentFormat::from_path(entry.path()).is_none() {
            tracing::debug!(path = %entry.path().display(), "skipping non-content file");
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}
