//! Jaccard similarity over tag sets.
//!
//! # Invariants
//! - Result is always within `[0.0, 1.0]`.
//! - Two empty sets score exactly `0.0`, never NaN.
//! - `score(a, b) == score(b, a)`.

use crate::model::item::TagSet;

/// Returns `|a ∩ b| / |a ∪ b|`, or `0.0` when both sets are empty.
pub fn score(a: &TagSet, b: &TagSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Returns tags present in both sets, in ascending order.
pub fn shared_tags(a: &TagSet, b: &TagSet) -> Vec<String> {
    a.intersection(b).cloned().collect()
}

/// Rounds a score to two decimal places for presentation.
pub fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
