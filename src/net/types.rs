//! Wire DTOs for the remote `/posts` resource.
//!
//! DESIGN
//! ======
//! The remote store is a json-server style resource that hands out either
//! integer or string ids and stores the publish status as a localized label.
//! These types absorb both quirks so the rest of the crate works with typed
//! values only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Wire label for a published article.
pub const PUBLISHED_LABEL: &str = "Đã xuất bản";
/// Wire label for an unpublished (blocked) article.
pub const UNPUBLISHED_LABEL: &str = "Ngừng xuất bản";

/// Identifier assigned by the remote store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ArticleId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ArticleId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Publish status. Toggled, never anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ArticleStatus {
    #[default]
    Published,
    Unpublished,
}

impl ArticleStatus {
    /// The opposite status.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Published => Self::Unpublished,
            Self::Unpublished => Self::Published,
        }
    }

    /// Localized label stored by the remote service.
    #[must_use]
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::Published => PUBLISHED_LABEL,
            Self::Unpublished => UNPUBLISHED_LABEL,
        }
    }

    /// Short label for terminal rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }
}

// Anything that is not an unpublished label (null included) renders as
// published, same as the remote view always did.
impl From<Option<String>> for ArticleStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(UNPUBLISHED_LABEL | "unpublished") => Self::Unpublished,
            _ => Self::Published,
        }
    }
}

impl From<ArticleStatus> for String {
    fn from(value: ArticleStatus) -> Self {
        value.wire_label().to_owned()
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An article as returned by the remote store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub date: String,
    #[serde(default)]
    pub status: ArticleStatus,
}

/// Body of `POST /posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub image: String,
    pub date: String,
    pub status: ArticleStatus,
}

/// Body of `PATCH /posts/{id}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub status: ArticleStatus,
}

// Hand-edited records may carry `null` where a string belongs; treat it as empty.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
