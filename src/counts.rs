//! Tag and category counting for the gist sidebar.
//!
//! Counting is a single read-only pass over a collection of gists. Fixed
//! category counters always exist; a tag counter exists only once some
//! gist carries that tag. Tag counters keep the order in which their tag
//! was first seen.
use std::{collections::HashMap, fmt};

use log::debug;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::Gist;

/// The fixed counters of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Public,
    Private,
    NoTag,
    All,
    MyGists,
    Starred,
}

impl Category {
    /// Every category, in output order
    pub const ALL: [Category; 6] = [
        Category::Public,
        Category::Private,
        Category::NoTag,
        Category::All,
        Category::MyGists,
        Category::Starred,
    ];

    /// Key under which the counter is published
    pub fn key(self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Private => "private",
            Category::NoTag => "noTag",
            Category::All => "all",
            Category::MyGists => "myGists",
            Category::Starred => "starred",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Whether this category counts `gist` when viewed by `owner_id`
    pub fn includes(self, gist: &Gist, owner_id: &str) -> bool {
        match self {
            Category::Public => gist.is_public(),
            Category::Private => !gist.is_public(),
            Category::NoTag => gist.tags().is_empty(),
            Category::All => true,
            Category::MyGists => gist.is_owned_by(owner_id),
            Category::Starred => gist.is_starred(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Counters that exist whether or not anything was counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub public: usize,
    pub private: usize,
    pub no_tag: usize,
    pub all: usize,
    pub my_gists: usize,
    pub starred: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Public => self.public,
            Category::Private => self.private,
            Category::NoTag => self.no_tag,
            Category::All => self.all,
            Category::MyGists => self.my_gists,
            Category::Starred => self.starred,
        }
    }

    fn bump(&mut self, category: Category) {
        let counter = match category {
            Category::Public => &mut self.public,
            Category::Private => &mut self.private,
            Category::NoTag => &mut self.no_tag,
            Category::All => &mut self.all,
            Category::MyGists => &mut self.my_gists,
            Category::Starred => &mut self.starred,
        };
        *counter += 1;
    }
}

/// Number of occurrences of one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Category counters plus per-tag counters for a collection of gists.
///
/// Serializes as one flat object: the category keys first, then one key
/// per tag in first-seen order. Tags always start with `#`, so the two
/// kinds of keys never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    categories: CategoryCounts,
    tags: Vec<TagCount>,
    positions: HashMap<String, usize>,
}

impl TagCounts {
    /// Counts `gists` as seen by the user `owner_id`.
    ///
    /// Each gist is visited once. Every tag occurrence is counted, so a
    /// gist carrying the same tag twice adds two to that tag.
    pub fn from_gists<'a, I>(gists: I, owner_id: &str) -> Self
    where
        I: IntoIterator<Item = &'a Gist>,
    {
        let mut counts = Self::default();
        for gist in gists {
            counts.add(gist, owner_id);
        }

        debug!(
            "Counted {} gist(s) with {} distinct tag(s)",
            counts.categories.all,
            counts.tags.len()
        );
        counts
    }

    fn add(&mut self, gist: &Gist, owner_id: &str) {
        for tag in gist.tags() {
            match self.positions.get(tag) {
                Some(&position) => self.tags[position].count += 1,
                None => {
                    self.positions.insert(tag.clone(), self.tags.len());
                    self.tags.push(TagCount {
                        name: tag.clone(),
                        count: 1,
                    });
                }
            }
        }

        for category in Category::ALL {
            if category.includes(gist, owner_id) {
                self.categories.bump(category);
            }
        }
    }

    pub fn categories(&self) -> &CategoryCounts {
        &self.categories
    }

    /// Tag counters in first-seen order
    pub fn tags(&self) -> &[TagCount] {
        &self.tags
    }

    /// Count for `tag`, or `None` if no gist carries it
    pub fn tag_count(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).map(|&position| self.tags[position].count)
    }

    /// Looks up any counter by its published key
    pub fn get(&self, key: &str) -> Option<usize> {
        match Category::from_key(key) {
            Some(category) => Some(self.categories.get(category)),
            None => self.tag_count(key),
        }
    }

    /// All counters as `(key, count)` pairs, in serialization order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category.key(), self.categories.get(category)))
            .chain(self.tags.iter().map(|tag| (tag.name.as_str(), tag.count)))
    }
}

/// Convenience wrapper around [`TagCounts::from_gists`]
pub fn count_tags(gists: &[Gist], owner_id: &str) -> TagCounts {
    TagCounts::from_gists(gists, owner_id)
}

impl Serialize for TagCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::ALL.len() + self.tags.len()))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key, &count)?;
        }
        map.end()
    }
}
