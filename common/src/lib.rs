//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_selection;
pub mod url_codec;
pub mod filter_store;
pub mod sync_controller;
pub mod product;
