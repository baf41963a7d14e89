use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::filter_query::FilterQuery;

use crate::pages::home_page::HomePage;
use crate::pages::shop_page::{ShopCategoryPage, ShopPage};
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/shop?:..query")]
    ShopPage { query: FilterQuery },


    // `/shop/whiskey` is rewritten in place to `/shop?category=whiskey`
    #[route("/shop/:category?:..query")]
    ShopCategoryPage { category: String, query: FilterQuery },


    #[route("/search?:..query")]
    SearchPage { query: FilterQuery },

}

impl Route {
    pub fn shop_page_from_query(query: FilterQuery) -> Self {
        Self::ShopPage { query }
    }

    pub fn shop_category(category: &str) -> Self {
        Self::ShopCategoryPage {
            category: category.to_lowercase(),
            query: FilterQuery::default(),
        }
    }
}

/// Which listing page a filter sync belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Shop,
    Search,
}

impl ListingKind {
    pub fn route(self, query: FilterQuery) -> Route {
        match self {
            ListingKind::Shop => Route::ShopPage { query },
            ListingKind::Search => Route::SearchPage { query },
        }
    }
}
