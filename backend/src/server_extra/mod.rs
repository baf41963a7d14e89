//! JSON endpoints mounted next to the fullstack router.

use axum::{
    extract::RawQuery,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::url_codec;
use serde_json::json;
use tracing::info;

use crate::api::{facets::get_facets, products::list_products};

fn failure(message: &str, e: anyhow::Error) -> Response {
    tracing::error!("{}: {:#?}", message, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}

/// `GET /api/products?category=..&brand=..&minPrice=..&maxPrice=..&sort=..&q=..&page=..`
pub async fn list_products_handler(RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    info!("list_products_handler: {:?}", query);
    let selection = url_codec::decode(&query);
    let search_text = url_codec::search_text(&query);
    let page_number = url_codec::page_number(&query);
    match list_products(selection, search_text, page_number).await {
        Ok(page) => Json(json!({ "success": true, "page": page })).into_response(),
        Err(e) => failure("Failed to fetch products", e),
    }
}

/// `GET /api/facets`
pub async fn facets_handler() -> Response {
    match get_facets().await {
        Ok(facets) => Json(json!({
            "success": true,
            "categories": facets.categories,
            "brands": facets.brands,
        }))
        .into_response(),
        Err(e) => failure("Failed to fetch facets", e),
    }
}
