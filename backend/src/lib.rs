//! Product listing backend: catalog access, filtered listings and facets.

pub mod api;
pub mod catalog;
pub mod config;
pub mod server_extra;
