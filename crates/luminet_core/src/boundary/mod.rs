//! Boundary between the external data store and core logic.
//!
//! # Responsibility
//! - Accept untyped records and hand typed `Item`s to the rest of the crate.

pub mod guard;
