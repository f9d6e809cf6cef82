//! Collaborator match ranking.
//!
//! # Responsibility
//! - Group other authors' items, score each author against the caller's tags,
//!   and return the best candidates.
//!
//! # Invariants
//! - The current author and items without an author never become candidates.
//! - Zero-score authors are dropped.
//! - Ordering is by raw score descending; ties keep first-seen author order.
//! - Scores are rounded to two decimals only after sorting and truncation.
//! - Identical inputs always produce identical output.

use crate::model::item::{AuthorId, Item, TagSet};
use crate::profile::aggregate::aggregate;
use crate::profile::cache::TagSetCache;
use crate::similarity::jaccard::{round_score, score};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result cap used when the caller does not supply one.
pub const DEFAULT_MATCH_LIMIT: usize = 20;
/// Maximum items carried as a sample per candidate.
pub const MAX_SAMPLE_ITEMS: usize = 3;
/// Maximum tags carried as a sample per candidate.
pub const MAX_SAMPLE_TAGS: usize = 10;

/// Ranking knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Maximum number of candidates to return.
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

/// One ranked collaborator suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub author_id: AuthorId,
    /// Jaccard score rounded to two decimals.
    pub score: f64,
    /// Up to `MAX_SAMPLE_ITEMS` of the author's items, first-seen order.
    pub sample_items: Vec<Item>,
    /// Up to `MAX_SAMPLE_TAGS` of the author's tags, ascending.
    pub sample_tags: Vec<String>,
}

struct AuthorGroup<'a> {
    author_id: &'a str,
    items: Vec<&'a Item>,
}

struct ScoredGroup<'a> {
    group: AuthorGroup<'a>,
    tags: TagSet,
    raw_score: f64,
}

/// Ranks other authors by tag overlap with `my_tags`.
pub fn rank(
    my_tags: &TagSet,
    others_items: &[Item],
    current_author_id: &str,
    limit: usize,
) -> Vec<MatchCandidate> {
    let groups = group_by_author(others_items, current_author_id);
    rank_groups(my_tags, groups, limit, |group| aggregate(&group.items))
}

/// Same as [`rank`] with limit taken from `options`.
pub fn rank_with_options(
    my_tags: &TagSet,
    others_items: &[Item],
    current_author_id: &str,
    options: &RankOptions,
) -> Vec<MatchCandidate> {
    rank(my_tags, others_items, current_author_id, options.limit)
}

/// Same as [`rank`], reusing and filling `cache` for other authors' tag sets.
pub fn rank_with_cache(
    cache: &mut TagSetCache,
    my_tags: &TagSet,
    others_items: &[Item],
    current_author_id: &str,
    limit: usize,
) -> Vec<MatchCandidate> {
    let groups = group_by_author(others_items, current_author_id);
    rank_groups(my_tags, groups, limit, |group| {
        cache
            .get_or_aggregate(group.author_id, &group.items)
            .clone()
    })
}

/// Aggregates the current author's tags from `items` and ranks everyone else.
///
/// `items` may hold the whole pool; the current author's entries are used only
/// for their own profile.
pub fn suggest_matches(
    items: &[Item],
    current_author_id: &str,
    options: &RankOptions,
) -> Vec<MatchCandidate> {
    let mine = items
        .iter()
        .filter(|item| item.is_authored_by(current_author_id))
        .collect::<Vec<_>>();
    let my_tags = aggregate(&mine);
    rank(&my_tags, items, current_author_id, options.limit)
}

fn rank_groups<'a, F>(
    my_tags: &TagSet,
    groups: Vec<AuthorGroup<'a>>,
    limit: usize,
    mut tags_for: F,
) -> Vec<MatchCandidate>
where
    F: FnMut(&AuthorGroup<'a>) -> TagSet,
{
    let author_count = groups.len();
    if limit == 0 {
        return Vec::new();
    }

    let mut scored = groups
        .into_iter()
        .map(|group| {
            let tags = tags_for(&group);
            let raw_score = score(my_tags, &tags);
            ScoredGroup {
                group,
                tags,
                raw_score,
            }
        })
        .filter(|entry| entry.raw_score > 0.0)
        .collect::<Vec<_>>();

    // `sort_by` is stable, so equal scores keep encounter order.
    scored.sort_by(|left, right| right.raw_score.total_cmp(&left.raw_score));
    scored.truncate(limit);

    let candidates = scored
        .into_iter()
        .map(|entry| MatchCandidate {
            author_id: entry.group.author_id.to_string(),
            score: round_score(entry.raw_score),
            sample_items: entry
                .group
                .items
                .iter()
                .take(MAX_SAMPLE_ITEMS)
                .map(|item| (*item).clone())
                .collect(),
            sample_tags: entry.tags.into_iter().take(MAX_SAMPLE_TAGS).collect(),
        })
        .collect::<Vec<_>>();

    debug!(
        "event=match_rank module=matching status=ok authors={} candidates={} limit={}",
        author_count,
        candidates.len(),
        limit
    );
    candidates
}

fn group_by_author<'a>(items: &'a [Item], current_author_id: &str) -> Vec<AuthorGroup<'a>> {
    let mut index_by_author = HashMap::<&'a str, usize>::new();
    let mut groups = Vec::<AuthorGroup<'a>>::new();

    for item in items {
        let Some(author_id) = item.author_id.as_deref() else {
            continue;
        };
        if author_id == current_author_id {
            continue;
        }

        match index_by_author.get(author_id) {
            Some(&index) => groups[index].items.push(item),
            None => {
                index_by_author.insert(author_id, groups.len());
                groups.push(AuthorGroup {
                    author_id,
                    items: vec![item],
                });
            }
        }
    }

    groups
}
