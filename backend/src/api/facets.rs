//! Facet values for the filter sidebar.

use std::collections::BTreeSet;

use common::product::{Product, ShopFacets};

use crate::catalog::load_catalog;

pub fn collect_facets(products: &[Product]) -> ShopFacets {
    let mut categories = BTreeSet::new();
    let mut brands = BTreeSet::new();
    for product in products.iter().filter(|p| p.in_stock) {
        if !product.category.is_empty() {
            categories.insert(product.category.clone());
        }
        if !product.brand.is_empty() {
            brands.insert(product.brand.clone());
        }
    }
    ShopFacets {
        categories: categories.into_iter().collect(),
        brands: brands.into_iter().collect(),
    }
}

pub async fn get_facets() -> anyhow::Result<ShopFacets> {
    let catalog = load_catalog().await?;
    Ok(collect_facets(&catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn facets_are_sorted_and_in_stock_only() {
        let facets = collect_facets(&builtin_catalog());
        let mut sorted = facets.brands.clone();
        sorted.sort();
        assert_eq!(facets.brands, sorted);
        assert!(!facets.brands.contains(&"Macallan".to_string()));
        assert!(facets.categories.contains(&"Whisky".to_string()));
        assert_eq!(facets.categories.iter().filter(|c| *c == "Whiskey").count(), 1);
    }

    #[tokio::test]
    async fn get_facets_uses_catalog() {
        let facets = get_facets().await.unwrap();
        assert!(facets.brands.contains(&"Lagavulin".to_string()));
        assert!(facets.categories.contains(&"Gin".to_string()));
    }
}
