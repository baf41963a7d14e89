//! Filtered, sorted and paged product listings.

use std::cmp::Ordering;

use common::{
    filter_selection::{FilterSelection, SortBy},
    product::{Product, ProductPage},
};

use crate::{
    catalog::{deduplicate_products, load_catalog},
    config::get_page_size,
};

/// Category slugs that stand for a group of catalog categories.
const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    ("spirits", &["whiskey", "whisky", "vodka", "gin", "rum", "tequila", "brandy", "cognac", "mezcal", "liqueur"]),
    ("wine", &["red wine", "white wine", "rose wine", "rosé wine", "sparkling wine", "champagne", "dessert wine", "wine"]),
    ("accessories", &["glassware", "bar tools", "tools", "accessories", "books", "mixers"]),
];

fn is_whiskey(category: &str) -> bool {
    category == "whiskey" || category == "whisky"
}

pub fn category_matches(product_category: &str, filter: &str) -> bool {
    let product_category = product_category.to_lowercase();
    let filter = filter.to_lowercase();

    if product_category == filter || product_category.replace(' ', "-") == filter {
        return true;
    }
    if is_whiskey(&product_category) && is_whiskey(&filter) {
        return true;
    }
    CATEGORY_GROUPS
        .iter()
        .find(|(group, _)| *group == filter)
        .map(|(_, members)| members.iter().any(|member| product_category.contains(member)))
        .unwrap_or(false)
}

fn search_matches(product: &Product, search_text: &str) -> bool {
    let needle = search_text.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.brand.to_lowercase().contains(&needle)
        || product.category.to_lowercase().contains(&needle)
}

pub fn filter_products(products: &[Product], selection: &FilterSelection, search_text: Option<&str>) -> Vec<Product> {
    let brands = selection.brands().iter().map(|b| b.to_lowercase()).collect::<Vec<_>>();
    products
        .iter()
        .filter(|p| p.in_stock)
        .filter(|p| match selection.category() {
            Some(category) => category_matches(&p.category, category),
            None => true,
        })
        .filter(|p| brands.is_empty() || brands.contains(&p.brand.to_lowercase()))
        .filter(|p| selection.price_range.contains(p.price))
        .filter(|p| match search_text {
            Some(text) => search_matches(p, text),
            None => true,
        })
        .cloned()
        .collect()
}

pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        // rating, then review count as a proxy for relevance
        SortBy::Relevance => products.sort_by(|a, b| match b.rating.total_cmp(&a.rating) {
            Ordering::Equal => b.review_count.cmp(&a.review_count),
            other => other,
        }),
    }
}

pub fn paginate(
    products: Vec<Product>,
    selection: FilterSelection,
    search_text: Option<String>,
    page_number: u64,
    page_size: u64,
) -> ProductPage {
    let total_count = products.len() as u64;
    let start = page_number.saturating_mul(page_size);
    let products = products
        .into_iter()
        .skip(start as usize)
        .take(page_size as usize)
        .collect::<Vec<_>>();
    let has_more = start.saturating_add(page_size) < total_count;
    ProductPage {
        selection,
        search_text,
        products,
        total_count,
        page_number,
        has_more,
    }
}

pub async fn list_products(selection: FilterSelection, search_text: Option<String>, page_number: u64) -> anyhow::Result<ProductPage> {
    let catalog = load_catalog().await?;
    let search_text = search_text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
    let mut products = deduplicate_products(filter_products(&catalog, &selection, search_text.as_deref()));
    sort_products(&mut products, selection.sort_by);
    tracing::info!(
        "list_products: {} matches for {:?} (search {:?}, page {})",
        products.len(),
        selection,
        search_text,
        page_number
    );
    Ok(paginate(products, selection, search_text, page_number, get_page_size()))
}

#[cfg(test)]
mod tests {
    use common::filter_selection::PriceRange;

    use super::*;
    use crate::catalog::builtin_catalog;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn category_match_rules() {
        assert!(category_matches("Red Wine", "red-wine"));
        assert!(category_matches("Red Wine", "RED WINE"));
        assert!(category_matches("Whisky", "whiskey"));
        assert!(category_matches("Champagne", "wine"));
        assert!(category_matches("Bar Tools", "accessories"));
        assert!(category_matches("Tequila", "spirits"));
        assert!(!category_matches("Gin", "wine"));
        assert!(!category_matches("Vodka", "gin"));
    }

    #[test]
    fn whiskey_filter_includes_whisky_and_skips_out_of_stock() {
        let selection = FilterSelection::default().with_category("whiskey");
        let products = filter_products(&builtin_catalog(), &selection, None);
        assert_eq!(ids(&products), vec!["wh-001", "wh-002", "wh-003", "wh-004"]);
    }

    #[test]
    fn brands_match_case_insensitively() {
        let selection = FilterSelection::default().with_brands(["ardbeg", "HENDRICK'S"]);
        let products = filter_products(&builtin_catalog(), &selection, None);
        assert_eq!(ids(&products), vec!["wh-002", "gi-001"]);
    }

    #[test]
    fn price_filter_uses_list_price() {
        let selection = FilterSelection::default().with_price_range(PriceRange::new(0, 30));
        let products = filter_products(&builtin_catalog(), &selection, None);
        assert_eq!(ids(&products), vec!["wh-003", "wi-002"]);

        // wh-002 lists at 89.99 with a 79.99 discount
        let selection = FilterSelection::default().with_category("whiskey").with_price_range(PriceRange::new(0, 80));
        let products = filter_products(&builtin_catalog(), &selection, None);
        assert_eq!(ids(&products), vec!["wh-003"]);
    }

    #[test]
    fn price_sort_uses_list_price() {
        // rum-002 lists at 39.99 with a 34.99 discount, gi-001 lists at 38.99
        let mut products = builtin_catalog()
            .into_iter()
            .filter(|p| ["rum-002", "gi-001"].contains(&p.id.as_str()))
            .collect::<Vec<_>>();
        sort_products(&mut products, SortBy::PriceAsc);
        assert_eq!(ids(&products), vec!["gi-001", "rum-002"]);
    }

    #[test]
    fn search_text_matches_name_brand_or_category() {
        let products = filter_products(&builtin_catalog(), &FilterSelection::default(), Some("TEQUILA"));
        assert_eq!(ids(&products), vec!["te-001", "te-002"]);
    }

    #[test]
    fn sort_orders() {
        let mut products = filter_products(&builtin_catalog(), &FilterSelection::default().with_category("gin"), None);
        sort_products(&mut products, SortBy::PriceAsc);
        assert_eq!(ids(&products), vec!["gi-002", "gi-001"]);
        sort_products(&mut products, SortBy::PriceDesc);
        assert_eq!(ids(&products), vec!["gi-001", "gi-002"]);
        sort_products(&mut products, SortBy::Newest);
        assert_eq!(ids(&products), vec!["gi-002", "gi-001"]);
    }

    #[test]
    fn relevance_orders_by_rating_then_reviews() {
        let mut whiskies = filter_products(&builtin_catalog(), &FilterSelection::default().with_category("whisky"), None);
        sort_products(&mut whiskies, SortBy::Relevance);
        assert_eq!(ids(&whiskies), vec!["wh-001", "wh-002", "wh-004", "wh-003"]);

        // all rated 4.8
        let mut tied = builtin_catalog()
            .into_iter()
            .filter(|p| ["rum-001", "te-002", "wh-002", "vo-001"].contains(&p.id.as_str()))
            .collect::<Vec<_>>();
        sort_products(&mut tied, SortBy::Relevance);
        assert_eq!(ids(&tied), vec!["vo-001", "wh-002", "te-002", "rum-001"]);
    }

    #[test]
    fn paginate_reports_more() {
        let products = builtin_catalog();
        let total = products.len() as u64;
        let page = paginate(products.clone(), FilterSelection::default(), None, 0, 5);
        assert_eq!(page.products.len(), 5);
        assert!(page.has_more);
        assert_eq!(page.total_count, total);

        let last = paginate(products.clone(), FilterSelection::default(), None, (total - 1) / 5, 5);
        assert!(!last.has_more);
        assert!(!last.products.is_empty());

        let past_end = paginate(products, FilterSelection::default(), None, 100, 5);
        assert!(past_end.products.is_empty());
    }

    #[tokio::test]
    async fn list_products_reads_builtin_catalog() {
        let selection = FilterSelection::default().with_category("spirits").with_sort_by(SortBy::PriceAsc);
        let page = list_products(selection.clone(), Some("  ".into()), 0).await.unwrap();
        assert_eq!(page.selection, selection);
        assert_eq!(page.search_text, None);
        assert_eq!(page.page_number, 0);
        let prices = page.products.iter().map(|p| p.price).collect::<Vec<_>>();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert!(page.products.iter().all(|p| p.in_stock));
    }
}
