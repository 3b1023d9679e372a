//! Content source configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_path() -> String {
    "content".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Content file or directory, relative to the project root unless absolute.
    #[serde(default = "default_path")]
    pub path: String,

    /// Skip files matched by `.gitignore` when walking a content directory.
    #[serde(default = "default_true")]
    pub follow_gitignore: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            follow_gitignore: true,
        }
    }
}

impl ContentConfig {
    /// Check field values that deserialization alone cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `path` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Content location resolved against `root`.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ContentConfig::default();
        assert_eq!(config.path, "content");
        assert!(config.follow_gitignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_path_is_invalid() {
        let config = ContentConfig {
            path: "  ".into(),
            follow_gitignore: true,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "content.path"
        ));
    }

    #[test]
    fn relative_path_resolves_under_root() {
        let config = ContentConfig::default();
        assert_eq!(
            config.resolve(Path::new("/site")),
            PathBuf::from("/site/content")
        );
    }

    #[test]
    fn absolute_path_is_kept() {
        let config = ContentConfig {
            path: "/data/topics.json".into(),
            follow_gitignore: false,
        };
        assert_eq!(
            config.resolve(Path::new("/site")),
            PathBuf::from("/data/topics.json")
        );
    }
}
