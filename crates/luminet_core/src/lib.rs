//! Core domain logic for Luminet.
//! Scoring, ranking and tagging rules for idea notes live here; storage and
//! presentation stay with the callers.

pub mod boundary;
pub mod graph;
pub mod logging;
pub mod matching;
pub mod model;
pub mod profile;
pub mod similarity;
pub mod tagging;

pub use boundary::guard::{
    load_items_from_path, load_items_from_str, narrow_item, narrow_items, IngestError, ItemBatch,
    ItemGuardError,
};
pub use graph::constellation::{
    build_constellation, Constellation, ConstellationLink, ConstellationNode,
    ConstellationOptions,
};
pub use logging::{
    default_log_level, init_logging, init_with_settings, logging_status, LogSettings,
};
pub use matching::ranker::{
    rank, rank_with_cache, rank_with_options, suggest_matches, MatchCandidate, RankOptions,
    DEFAULT_MATCH_LIMIT,
};
pub use model::item::{AuthorId, Item, ItemId, TagSet};
pub use profile::aggregate::{aggregate, aggregate_items, tokenize_content};
pub use profile::cache::TagSetCache;
pub use similarity::jaccard::score;
pub use tagging::heuristic::{detect_mood, suggest_keywords, tag_note, Mood, NoteTags};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
