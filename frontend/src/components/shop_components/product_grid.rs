//! Paged product grid for the current filter selection.

use common::product::{Product, ProductPage};
use dioxus::prelude::*;

use crate::{
    api::shop_api::list_products,
    components::{error_boundary::ComponentErrorDisplay, shop_components::product_card::ProductCard, suspend_boundary::LoadingIndicator},
};
use super::filter_url_sync::FilterSyncContext;

#[derive(Debug, Clone, PartialEq, Default)]
struct LoadedProducts {
    products: Vec<Product>,
    total_count: u64,
    has_more: bool,
}

impl LoadedProducts {
    /// Appends the next page; returns whether another page follows.
    fn push_page(&mut self, page: ProductPage) -> bool {
        self.products.extend(page.products);
        self.total_count = page.total_count;
        self.has_more = page.has_more;
        self.has_more
    }
}

#[component]
pub fn ProductGrid(search_text: ReadSignal<Option<String>>) -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();
    let mut pages_loaded = use_signal(|| 1_u64);

    // a new selection starts over from the first page; the resource below
    // reruns on its own, so only touch the signal when it has moved
    use_effect(move || {
        let _ = selection.read();
        let _ = search_text.read();
        if *pages_loaded.peek() != 1 {
            pages_loaded.set(1);
        }
    });

    let loaded = use_resource(move || {
        let selection = selection.read().clone();
        let search_text = search_text.read().clone();
        let pages = *pages_loaded.read();
        async move {
            let mut acc = LoadedProducts::default();
            for page_number in 0..pages {
                let page = list_products(selection.clone(), search_text.clone(), page_number).await?;
                if !acc.push_page(page) {
                    break;
                }
            }
            Ok::<_, ServerFnError>(acc)
        }
    });

    let loaded = loaded.read();
    let loaded = match loaded.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(loaded)) => loaded.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    if loaded.products.is_empty() {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center; color: #6B7280; font-size: 18px;",
                "No products match these filters."
            }
        };
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            div {
                style: "font-size: 14px; color: #6B7280;",
                "Showing {loaded.products.len()} of {loaded.total_count} products"
            }
            div {
                class: "x-product-grid",
                for product in loaded.products {
                    ProductCard { key: "{product.id}", product }
                }
            }
            if loaded.has_more {
                button {
                    style: "
                        align-self: center;
                        padding: 10px 24px;
                        border-radius: 9999px;
                        border: 1px solid #8C3B1F;
                        background: white;
                        color: #8C3B1F;
                        cursor: pointer;
                    ",
                    onclick: move |_| *pages_loaded.write() += 1,
                    "Load more"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::filter_selection::FilterSelection;

    use super::*;

    fn page(ids: &[&str], page_number: u64, has_more: bool) -> ProductPage {
        let products = ids
            .iter()
            .map(|id| Product {
                id: id.to_string(),
                name: id.to_string(),
                slug: id.to_string(),
                brand: "Ardbeg".to_string(),
                category: "Whiskey".to_string(),
                subcategory: None,
                price: 50.0,
                discount_price: None,
                rating: 4.5,
                review_count: 10,
                in_stock: true,
                created_at: "2026-01-01T00:00:00Z".to_string(),
                image: None,
            })
            .collect();
        ProductPage {
            selection: FilterSelection::default(),
            search_text: None,
            products,
            total_count: 3,
            page_number,
            has_more,
        }
    }

    #[test]
    fn pages_accumulate_until_the_last() {
        let mut loaded = LoadedProducts::default();
        assert!(loaded.push_page(page(&["a", "b"], 0, true)));
        assert!(!loaded.push_page(page(&["c"], 1, false)));
        let ids = loaded.products.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(loaded.total_count, 3);
        assert!(!loaded.has_more);
    }
}
