//! Route and state data types.

pub mod filter_query;
