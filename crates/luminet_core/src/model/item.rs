//! Idea item domain model.
//!
//! # Responsibility
//! - Define the typed record every scoring path consumes.
//! - Keep external-record quirks (null author, missing keywords) explicit in
//!   the shape instead of leaking untyped values into core logic.
//!
//! # Invariants
//! - `author_id` is `None` when the source record had no usable author.
//! - `keywords == None` means "no keywords", never an error.
//! - Scoring reads items by reference and never mutates them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier of one idea item, as issued by the external store.
pub type ItemId = String;

/// Stable identifier of one author (account) in the external store.
pub type AuthorId = String;

/// Lowercase keyword/token vocabulary for one author or one item.
///
/// Ordered so that iteration and sampling are deterministic.
pub type TagSet = BTreeSet<String>;

/// User-authored idea note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Owning author. Serialized as `user_id` to match the external schema.
    #[serde(rename = "user_id")]
    pub author_id: Option<AuthorId>,
    /// Free-text note body.
    pub content: String,
    /// Optional keywords, in the order the author entered them.
    pub keywords: Option<Vec<String>>,
}

impl Item {
    /// Creates an item with an author and no keywords.
    pub fn new(
        id: impl Into<ItemId>,
        author_id: impl Into<AuthorId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author_id: Some(author_id.into()),
            content: content.into(),
            keywords: None,
        }
    }

    /// Replaces the keyword list.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether this item belongs to `author_id`.
    pub fn is_authored_by(&self, author_id: &str) -> bool {
        self.author_id.as_deref() == Some(author_id)
    }
}
