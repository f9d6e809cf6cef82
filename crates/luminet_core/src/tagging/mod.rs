//! Lightweight tagging for notes saved without keywords.
//!
//! # Responsibility
//! - Derive keyword and mood suggestions from free text.

pub mod heuristic;
