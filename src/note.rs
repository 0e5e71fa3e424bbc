//! The gist entity and the API record it is built from.
//!
//! Description and tags are only ever set together through
//! [`Gist::set_description_and_tags`], so the stored tags always match
//! what was removed from the stored description.
use std::collections::BTreeMap;

use log::{trace, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{extract_tags, normalize_date, Result};

/// The user who authored a gist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Identifier compared against the viewer's id; absent when the
    /// record carried no usable id
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    /// Login name, display only
    #[serde(default, deserialize_with = "lenient_string")]
    pub login: Option<String>,
}

impl Owner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            login: None,
        }
    }
}

/// Represents a single gist in our system
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Gist {
    id: String,
    owner: Owner,
    description: String,
    tags: Vec<String>,
    created_at: String,
    updated_at: String,
    files: BTreeMap<String, Value>,
    is_public: bool,
    is_starred: bool,
    html_url: String,
}

impl Gist {
    /// Creates an empty private, unstarred gist with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Seeks tags in the raw description and stores them and the
    /// remaining text separately
    pub fn set_description_and_tags(&mut self, raw: &str) {
        let extracted = extract_tags(raw);
        self.description = extracted.description;
        self.tags = extracted.tags;
    }

    pub fn set_created_at(&mut self, raw: &str) -> Result<()> {
        self.created_at = normalize_date(raw)?;
        Ok(())
    }

    pub fn set_updated_at(&mut self, raw: &str) -> Result<()> {
        self.updated_at = normalize_date(raw)?;
        Ok(())
    }

    pub fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    pub fn set_files(&mut self, files: BTreeMap<String, Value>) {
        self.files = files;
    }

    pub fn set_is_public(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    pub fn set_is_starred(&mut self, is_starred: bool) {
        self.is_starred = is_starred;
    }

    pub fn set_html_url(&mut self, html_url: impl Into<String>) {
        self.html_url = html_url.into();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Owner id, if the record carried one
    pub fn owner_id(&self) -> Option<&str> {
        self.owner.id.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn files(&self) -> &BTreeMap<String, Value> {
        &self.files
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn is_starred(&self) -> bool {
        self.is_starred
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Whether the gist belongs to `owner_id`. A gist without an owner id
    /// belongs to nobody.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id() == Some(owner_id)
    }

    /// Whether the gist carries `tag` at least once
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A gist as delivered by the gists API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GistRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_owner")]
    pub owner: Owner,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_files")]
    pub files: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub public: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub starred: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub html_url: Option<String>,
}

/// Timestamps that cannot be parsed are left empty; the gist is kept.
impl From<GistRecord> for Gist {
    fn from(record: GistRecord) -> Self {
        let mut gist = Gist::new(record.id.unwrap_or_default());
        gist.set_owner(record.owner);
        gist.set_description_and_tags(record.description.as_deref().unwrap_or_default());
        if let Err(e) = gist.set_created_at(record.created_at.as_deref().unwrap_or_default()) {
            warn!("Gist {}: created_at left empty: {}", gist.id, e);
        }
        if let Err(e) = gist.set_updated_at(record.updated_at.as_deref().unwrap_or_default()) {
            warn!("Gist {}: updated_at left empty: {}", gist.id, e);
        }
        gist.set_files(record.files);
        gist.set_is_public(record.public);
        gist.set_is_starred(record.starred);
        gist.set_html_url(record.html_url.unwrap_or_default());

        trace!("Built gist {} with {} tag(s)", gist.id, gist.tags.len());
        gist
    }
}

/// Ids arrive as numbers or strings; anything else counts as missing.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_from_value(Value::deserialize(deserializer)?))
}

fn id_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Anything but a string counts as missing.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Each owner field degrades on its own, so a bad login keeps a good id.
fn lenient_owner<'de, D>(deserializer: D) -> std::result::Result<Owner, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(mut fields) = Value::deserialize(deserializer)? else {
        return Ok(Owner::default());
    };

    Ok(Owner {
        id: fields.remove("id").and_then(id_from_value),
        login: match fields.remove("login") {
            Some(Value::String(login)) => Some(login),
            _ => None,
        },
    })
}

fn lenient_files<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(files) => files.into_iter().collect(),
        _ => BTreeMap::new(),
    })
}

/// Only a literal `true` is true.
fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}
