//! Content filter passed through to repositories.
//!
//! The filter is interpreted by each repository; the loading layer passes
//! it along unchanged and applies no filtering of its own.

use serde::{Deserialize, Serialize};

/// Filter criteria for content collection queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentFilter {
    /// Case-insensitive substring match against name and description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact tag match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Base film-simulation slug (e.g. `"classic-chrome"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_sim: Option<String>,
}

impl ContentFilter {
    /// Create an empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Set the tag to match.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the base film-simulation slug to match.
    pub fn film_sim(mut self, slug: impl Into<String>) -> Self {
        self.film_sim = Some(slug.into());
        self
    }

    /// Whether this filter constrains anything at all.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none() && self.film_sim.is_none()
    }
}
