use dioxus::prelude::*;

use common::url_codec;
use crate::{
    components::{
        shop_components::{
            applied_filters::AppliedFilters, filter_sidebar::FilterSidebar, filter_url_sync::use_filter_url_sync,
            product_grid::ProductGrid, product_sort::ProductSort,
        },
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::filter_query::FilterQuery,
    routes::{ListingKind, Route},
};

/// Shop listing page
#[component]
pub fn ShopPage(query: FilterQuery) -> Element {
    rsx! {
        Title { "Cellar - Shop" }
        ListingPageRoot { query, kind: ListingKind::Shop }
    }
}

/// `/shop/<slug>` folds the slug into `?category=` and replaces the entry.
#[component]
pub fn ShopCategoryPage(category: String, query: FilterQuery) -> Element {
    rsx! {
        CategoryRedirect { category, query }
    }
}

#[component]
fn CategoryRedirect(category: ReadSignal<String>, query: ReadSignal<FilterQuery>) -> Element {
    use_effect(move || {
        let query = url_codec::with_category(query.read().as_str(), &category.read());
        navigator().replace(Route::ShopPage { query: FilterQuery::from(query) });
    });
    rsx! {
        LoadingIndicator {}
    }
}

#[component]
pub(crate) fn ListingPageRoot(query: ReadSignal<FilterQuery>, kind: ListingKind) -> Element {
    let _filters = use_filter_url_sync(query, kind);
    let search_text = use_memo(move || query.read().search_text());

    rsx! {
        div {
            id: "x-listing-page-root",
            style: "
                display: flex;
                flex-direction: row;
                gap: 24px;
                width: 100%;
                height: 100%;
                overflow: auto;
                box-sizing: border-box;
                padding: 24px;
            ",
            aside {
                style: "flex-shrink: 0;",
                SuspendWrapper { FilterSidebar {} }
            }
            div {
                style: "flex-grow: 1; min-width: 300px; display: flex; flex-direction: column;",
                div {
                    style: "display: flex; flex-direction: row; align-items: flex-start; justify-content: space-between; gap: 16px;",
                    AppliedFilters {}
                    ProductSort {}
                }
                SuspendWrapper { ProductGrid { search_text } }
            }
        }
    }
}
