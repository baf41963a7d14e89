//! Side navigation shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch, MdShoppingCart};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::filter_query::FilterQuery;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavSection {
    Home,
    Shop,
    Search,
}

impl NavSection {
    fn of(route: &Route) -> Self {
        match route {
            Route::HomePage {} => NavSection::Home,
            Route::ShopPage { .. } | Route::ShopCategoryPage { .. } => NavSection::Shop,
            Route::SearchPage { .. } => NavSection::Search,
        }
    }
}

/// Layout route: icon rail on the left, page on the right.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let active = NavSection::of(&route);

    rsx! {
        div {
            id: "x-nav-container",
            style: "display: flex; flex-direction: row; width: 100%; height: 100%;",

            nav {
                id: "x-nav-rail",
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 28px;
                    width: 64px;
                    height: 100%;
                    padding: 20px 0;
                    box-sizing: border-box;
                    background-color: #2A1A12;
                ",
                NavLink { to: Route::HomePage {}, icon: MdHome, label: "Home", active: active == NavSection::Home }
                NavLink {
                    to: Route::shop_page_from_query(FilterQuery::default()),
                    icon: MdShoppingCart,
                    label: "Shop",
                    active: active == NavSection::Shop,
                }
                NavLink {
                    to: Route::SearchPage { query: FilterQuery::default() },
                    icon: MdSearch,
                    label: "Search",
                    active: active == NavSection::Search,
                }
            }

            main {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String, active: bool) -> Element {
    let color = if active { "#F2B28C" } else { "rgba(255,255,255,0.75)" };
    rsx! {
        Link {
            to,
            span {
                title: "{label}",
                style: "display: flex; color: {color};",
                Icon { icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
