//! Routing keys for topics.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Ordered path segments identifying a topic, e.g. `["flex", "grow"]`.
///
/// Serialized as a plain array of strings. The site router joins the segments
/// with `/` to form the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Split a joined path like `flex/grow` or `/flex/grow/` into a slug.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSlug` when the path has no segments or
    /// contains an empty segment (`flex//grow`).
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(CoreError::InvalidSlug {
                input: path.to_string(),
                reason: "no path segments".into(),
            });
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(CoreError::InvalidSlug {
                input: path.to_string(),
                reason: "empty path segment".into(),
            });
        }

        Ok(Self::new(segments))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joined routing path, e.g. `flex/grow`.
    #[must_use]
    pub fn path(&self) -> String {
        self.0.join("/")
    }

    /// Segment-wise, order-sensitive comparison against borrowed segments.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.0.len() == segments.len()
            && self
                .0
                .iter()
                .zip(segments)
                .all(|(own, other)| own == other.as_ref())
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Slug {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<S: Into<String>> FromIterator<S> for Slug {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
