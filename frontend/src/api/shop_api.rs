//! Client API calls for the listing endpoints.

use common::{filter_selection::FilterSelection, product::{ProductPage, ShopFacets}};
use dioxus::prelude::*;




#[server]
pub async fn list_products(selection: FilterSelection, search_text: Option<String>, page_number: u64) -> Result<ProductPage, ServerFnError> {
    let x = backend::api::products::list_products(selection, search_text, page_number).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_facets() -> Result<ShopFacets, ServerFnError> {
    let x = backend::api::facets::get_facets().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
