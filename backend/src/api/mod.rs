//! Listing API exports.

pub mod facets;
pub mod products;
