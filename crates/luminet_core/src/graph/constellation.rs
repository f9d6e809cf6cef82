//! Idea constellation graph.
//!
//! # Responsibility
//! - Derive nodes and tag-overlap links between individual ideas for the
//!   graph view.
//!
//! # Invariants
//! - Nodes keep input order; `source < target` for every link.
//! - No self-links and each unordered pair appears at most once.
//! - Links are ordered by raw score descending; ties keep pair order.

use crate::model::item::{AuthorId, Item, ItemId, TagSet};
use crate::profile::aggregate::aggregate;
use crate::similarity::jaccard::{round_score, score, shared_tags};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LINK_SCORE: f64 = 0.1;
pub const DEFAULT_MAX_LINKS: usize = 200;

/// Link selection knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationOptions {
    /// Minimum raw score for a link. Zero-score pairs are never linked.
    pub min_score: f64,
    /// Maximum number of links kept.
    pub max_links: usize,
    /// Drop links between two ideas of the same author.
    pub cross_author_only: bool,
}

impl Default for ConstellationOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_LINK_SCORE,
            max_links: DEFAULT_MAX_LINKS,
            cross_author_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationNode {
    pub item_id: ItemId,
    pub author_id: Option<AuthorId>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationLink {
    /// Index into `Constellation::nodes`.
    pub source: usize,
    /// Index into `Constellation::nodes`.
    pub target: usize,
    /// Rounded to two decimals.
    pub score: f64,
    pub shared_tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub nodes: Vec<ConstellationNode>,
    pub links: Vec<ConstellationLink>,
}

/// Builds the constellation for `items`.
pub fn build_constellation(items: &[Item], options: &ConstellationOptions) -> Constellation {
    let tag_sets = items
        .iter()
        .map(|item| aggregate(&[item]))
        .collect::<Vec<TagSet>>();

    let mut scored = Vec::<(f64, ConstellationLink)>::new();
    for source in 0..items.len() {
        for target in (source + 1)..items.len() {
            if options.cross_author_only && same_author(&items[source], &items[target]) {
                continue;
            }

            let raw = score(&tag_sets[source], &tag_sets[target]);
            if raw <= 0.0 || raw < options.min_score {
                continue;
            }

            scored.push((
                raw,
                ConstellationLink {
                    source,
                    target,
                    score: round_score(raw),
                    shared_tags: shared_tags(&tag_sets[source], &tag_sets[target]),
                },
            ));
        }
    }

    scored.sort_by(|left, right| right.0.total_cmp(&left.0));
    scored.truncate(options.max_links);

    let nodes = items
        .iter()
        .zip(tag_sets)
        .map(|(item, tags)| ConstellationNode {
            item_id: item.id.clone(),
            author_id: item.author_id.clone(),
            tags: tags.into_iter().collect(),
        })
        .collect::<Vec<_>>();
    let links = scored.into_iter().map(|(_, link)| link).collect::<Vec<_>>();

    debug!(
        "event=constellation_build module=graph status=ok nodes={} links={}",
        nodes.len(),
        links.len()
    );
    Constellation { nodes, links }
}

fn same_author(left: &Item, right: &Item) -> bool {
    match (left.author_id.as_deref(), right.author_id.as_deref()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
