//! Caller-owned tag-set cache keyed by author.
//!
//! # Invariants
//! - A cached entry equals what [`aggregate`] returns for the items supplied
//!   on the miss that populated it.
//! - Entries are only dropped through `invalidate`/`clear`; callers invalidate
//!   when an author's items change.

use crate::model::item::{AuthorId, Item, TagSet};
use crate::profile::aggregate::aggregate;
use std::collections::HashMap;

/// Memoizes aggregated tag sets between ranking requests.
#[derive(Debug, Default, Clone)]
pub struct TagSetCache {
    entries: HashMap<AuthorId, TagSet>,
}

impl TagSetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached tag set for `author_id`, aggregating `items` on miss.
    pub fn get_or_aggregate(&mut self, author_id: &str, items: &[&Item]) -> &TagSet {
        self.entries
            .entry(author_id.to_string())
            .or_insert_with(|| aggregate(items))
    }

    /// Returns the cached tag set without aggregating.
    pub fn get(&self, author_id: &str) -> Option<&TagSet> {
        self.entries.get(author_id)
    }

    /// Drops one author's entry. Returns whether an entry existed.
    pub fn invalidate(&mut self, author_id: &str) -> bool {
        self.entries.remove(author_id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
