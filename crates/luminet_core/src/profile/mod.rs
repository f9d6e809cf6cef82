//! Author profile derivation.
//!
//! # Responsibility
//! - Turn an author's items into the tag vocabulary used for scoring.
//! - Offer an explicit cache object for callers that rank repeatedly.

pub mod aggregate;
pub mod cache;
