//! Author profile aggregation.
//!
//! # Responsibility
//! - Fold one author's items into a single lowercase `TagSet`.
//! - Own the content tokenization fallback used when no keywords exist.
//!
//! # Invariants
//! - Keywords win: content is tokenized only when the keyword union is empty.
//! - Fallback tokens are split on runs of `[^A-Za-z0-9_]` and kept only when
//!   longer than `MAX_DROPPED_TOKEN_LEN` characters.
//! - Missing keyword lists contribute nothing and never fail.

use crate::model::item::{Item, TagSet};
use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback tokens of this many characters or fewer are dropped.
pub const MAX_DROPPED_TOKEN_LEN: usize = 3;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid non-word regex"));

/// Aggregates the tag set for one author's items.
///
/// Callers pre-filter `items` by author.
pub fn aggregate(items: &[&Item]) -> TagSet {
    let mut tags = TagSet::new();
    for item in items {
        if let Some(keywords) = item.keywords.as_ref() {
            tags.extend(keywords.iter().map(|keyword| keyword.to_lowercase()));
        }
    }

    if tags.is_empty() {
        for item in items {
            tags.extend(tokenize_content(item.content.as_str()));
        }
    }

    tags
}

/// Convenience wrapper over [`aggregate`] for an owned slice.
pub fn aggregate_items(items: &[Item]) -> TagSet {
    let refs = items.iter().collect::<Vec<_>>();
    aggregate(&refs)
}

/// Tokenizes free text into lowercase tokens longer than `MAX_DROPPED_TOKEN_LEN`.
pub fn tokenize_content(content: &str) -> TagSet {
    content_tokens(content).collect()
}

/// Yields fallback tokens in text order, duplicates included.
pub(crate) fn content_tokens(content: &str) -> impl Iterator<Item = String> + '_ {
    NON_WORD_RE
        .split(content)
        .filter(|token| token.chars().count() > MAX_DROPPED_TOKEN_LEN)
        .map(str::to_lowercase)
}
