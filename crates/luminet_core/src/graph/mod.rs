//! Graph projections over idea items.

pub mod constellation;
