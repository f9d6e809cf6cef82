//! Domain model for idea items and derived tag sets.
//!
//! # Responsibility
//! - Define canonical data structures used by scoring and ranking.
//!
//! # Invariants
//! - Account, project and message records stay owned by the external store
//!   and never appear here.

pub mod item;
