//! Collaborator matching.
//!
//! # Responsibility
//! - Combine profile aggregation and similarity scoring into ranked
//!   collaborator suggestions for the match view.

pub mod ranker;
