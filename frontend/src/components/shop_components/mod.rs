//! Listing page building blocks: filter sync, sidebar, chips, sort, grid.

pub mod applied_filters;
pub mod filter_sidebar;
pub mod filter_url_sync;
pub mod product_card;
pub mod product_grid;
pub mod product_sort;
pub mod search_input_top_bar;
