//! Keyword and mood heuristic for free-text notes.
//!
//! # Responsibility
//! - Suggest keywords for a note that was saved without any.
//! - Infer a coarse mood label from note wording.
//!
//! # Invariants
//! - Keyword candidates use the same tokenization as profile aggregation, so
//!   suggested keywords always overlap the content fallback.
//! - Output is deterministic: frequency desc, then first occurrence.
//! - Text with no lexicon hits is `Mood::Neutral`.

use crate::profile::aggregate::content_tokens;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Keyword count used by [`tag_note`].
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_']+").expect("valid word regex"));

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

const STOP_WORD_LIST: &[&str] = &[
    "about", "after", "again", "also", "because", "been", "before", "being", "could", "does",
    "doing", "each", "from", "have", "having", "here", "into", "just", "like", "more", "most",
    "much", "only", "other", "over", "really", "same", "should", "some", "such", "than", "that",
    "their", "them", "then", "there", "these", "they", "thing", "things", "this", "those",
    "very", "want", "were", "what", "when", "where", "which", "while", "will", "with", "would",
    "your",
];

const EXCITED_WORDS: &[&str] = &[
    "amazing", "awesome", "excited", "exciting", "thrilled", "love", "great", "wow", "can't",
    "finally",
];
const CURIOUS_WORDS: &[&str] = &[
    "wonder", "wondering", "curious", "maybe", "how", "why", "what", "explore", "if",
];
const FOCUSED_WORDS: &[&str] = &[
    "plan", "build", "ship", "deadline", "todo", "next", "step", "steps", "goal", "focus",
];
const REFLECTIVE_WORDS: &[&str] = &[
    "realized", "learned", "remember", "feel", "felt", "thinking", "looking", "back",
    "grateful", "lesson",
];
const FRUSTRATED_WORDS: &[&str] = &[
    "stuck", "annoying", "frustrated", "broken", "hate", "tired", "again", "confused", "bug",
    "fails",
];

/// Coarse emotional tone of a note.
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Excited,
    Curious,
    Focused,
    Reflective,
    Frustrated,
    Neutral,
}

impl Mood {
    fn lexicon(self) -> &'static [&'static str] {
        match self {
            Self::Excited => EXCITED_WORDS,
            Self::Curious => CURIOUS_WORDS,
            Self::Focused => FOCUSED_WORDS,
            Self::Reflective => REFLECTIVE_WORDS,
            Self::Frustrated => FRUSTRATED_WORDS,
            Self::Neutral => &[],
        }
    }
}

const SCORED_MOODS: [Mood; 5] = [
    Mood::Excited,
    Mood::Curious,
    Mood::Focused,
    Mood::Reflective,
    Mood::Frustrated,
];

/// Heuristic tags for one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTags {
    pub keywords: Vec<String>,
    pub mood: Mood,
}

/// Suggests up to `max` keywords from `content`.
pub fn suggest_keywords(content: &str, max: usize) -> Vec<String> {
    let mut order = Vec::<String>::new();
    let mut counts = HashMap::<String, usize>::new();

    for token in content_tokens(content) {
        if STOP_WORDS.contains(token.as_str()) {
            continue;
        }
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first occurrence order among equal counts.
    order.sort_by(|left, right| counts[right].cmp(&counts[left]));
    order.truncate(max);
    order
}

/// Infers the dominant mood of `content`.
pub fn detect_mood(content: &str) -> Mood {
    let lowered = content.to_lowercase();
    let words = WORD_RE
        .find_iter(lowered.as_str())
        .map(|found| found.as_str())
        .collect::<Vec<_>>();

    let mut best = Mood::Neutral;
    let mut best_hits = 0usize;
    for mood in SCORED_MOODS {
        let lexicon = mood.lexicon();
        let mut hits = words.iter().filter(|word| lexicon.contains(*word)).count();
        if mood == Mood::Curious {
            hits += usize::from(lowered.contains('?'));
        }
        if hits > best_hits {
            best = mood;
            best_hits = hits;
        }
    }
    best
}

/// Suggests keywords and a mood for a free-text note.
pub fn tag_note(content: &str) -> NoteTags {
    NoteTags {
        keywords: suggest_keywords(content, DEFAULT_KEYWORD_COUNT),
        mood: detect_mood(content),
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_mood, suggest_keywords, Mood, STOP_WORDS, STOP_WORD_LIST};

    #[test]
    fn stop_word_set_covers_the_whole_list() {
        assert_eq!(STOP_WORDS.len(), STOP_WORD_LIST.len());
        for word in STOP_WORD_LIST {
            assert!(suggest_keywords(word, 5).is_empty(), "`{word}` leaked");
        }
    }

    #[test]
    fn question_mark_counts_toward_curious() {
        assert_eq!(detect_mood("Solar roofs for renters?"), Mood::Curious);
    }

    #[test]
    fn tie_prefers_earlier_declared_mood() {
        // one excited hit, one frustrated hit
        assert_eq!(detect_mood("awesome but stuck"), Mood::Excited);
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        assert_eq!(detect_mood("I can't wait"), Mood::Excited);
    }
}
