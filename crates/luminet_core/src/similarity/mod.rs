//! Set-similarity scoring.
//!
//! # Responsibility
//! - Provide the pure overlap metric shared by matching and the graph view.

pub mod jaccard;
