//! Product listing models shared by the listing API and the shop pages.

use serde::{Deserialize, Serialize};

use crate::filter_selection::FilterSelection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// ISO-8601 timestamp, compared lexicographically.
    pub created_at: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// The price the customer pays: the discount price when there is one.
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self.discount_price, Some(discount) if discount < self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub selection: FilterSelection,
    pub search_text: Option<String>,
    pub products: Vec<Product>,
    pub total_count: u64,
    pub page_number: u64,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShopFacets {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_row_defaults() {
        let product: Product = serde_json::from_str(
            r#"{"id":"vo-001","name":"Grey Goose Vodka","slug":"grey-goose-vodka","brand":"Grey Goose",
                "category":"Vodka","price":34.99,"discount_price":29.99,"created_at":"2026-09-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(product.in_stock);
        assert_eq!(product.review_count, 0);
        assert_eq!(product.effective_price(), 29.99);
        assert!(product.is_discounted());
    }
}
