use std::{fmt, str::FromStr};

use crate::{Category, Gist, GistError, Result};

/// A sidebar selection: one of the fixed categories or a single tag.
///
/// Filters are keyed exactly like the counters in [`crate::TagCounts`],
/// and a category filter selects exactly the gists its counter counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GistFilter {
    Category(Category),
    Tag(String),
}

impl GistFilter {
    pub fn matches(&self, gist: &Gist, owner_id: &str) -> bool {
        match self {
            GistFilter::Category(category) => category.includes(gist, owner_id),
            GistFilter::Tag(tag) => gist.has_tag(tag),
        }
    }

    /// The gists selected by this filter, in input order
    pub fn apply<'a>(&self, gists: &'a [Gist], owner_id: &str) -> Vec<&'a Gist> {
        gists
            .iter()
            .filter(|gist| self.matches(gist, owner_id))
            .collect()
    }
}

impl Default for GistFilter {
    fn default() -> Self {
        GistFilter::Category(Category::All)
    }
}

impl FromStr for GistFilter {
    type Err = GistError;

    fn from_str(key: &str) -> Result<Self> {
        if let Some(category) = Category::from_key(key) {
            return Ok(GistFilter::Category(category));
        }
        if crate::is_tag(key) {
            return Ok(GistFilter::Tag(key.to_string()));
        }
        Err(GistError::InvalidFilter {
            filter: key.to_string(),
        })
    }
}

impl fmt::Display for GistFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GistFilter::Category(category) => write!(f, "{category}"),
            GistFilter::Tag(tag) => f.write_str(tag),
        }
    }
}
