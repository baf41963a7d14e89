use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::filter_selection::{FilterSelection, PriceRange, SortBy};
use common::url_codec;
use crate::data_definitions::filter_query::FilterQuery;
use crate::routes::Route;

const FEATURED_CATEGORIES: [(&str, &str); 6] = [
    ("Whiskey", "Single malts, bourbons and blends"),
    ("Wine", "Reds, whites and champagne"),
    ("Tequila", "Blanco to extra anejo"),
    ("Gin", "London dry and modern botanicals"),
    ("Rum", "Aged and spiced"),
    ("Accessories", "Glassware and bar tools"),
];

const PRICE_BANDS: [(&str, u32, u32); 3] = [("Under $50", 0, 50), ("$50 - $200", 50, 200), ("Collector bottles", 200, 2000)];

fn quick_link(price_range: PriceRange, sort_by: SortBy) -> Route {
    let selection = FilterSelection::default().with_price_range(price_range).with_sort_by(sort_by);
    Route::shop_page_from_query(FilterQuery::from_selection(&selection))
}

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Cellar - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            HomeSearchInput {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                for (category, blurb) in FEATURED_CATEGORIES {
                    CategoryCard { key: "{category}", category: category.to_string(), blurb: blurb.to_string() }
                }
            }

            QuickLinks {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#8C3B1F;", "Cellar" }
        }
    }
}

#[component]
fn CategoryCard(category: String, blurb: String) -> Element {
    rsx! {
        Link {
            to: Route::shop_category(&category),
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 10px;
                    width: 260px;
                    min-height: 120px;
                    border-radius: 18px;
                    padding: 20px;
                    background: linear-gradient(135deg, #3B1E12 0%, #8C3B1F 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div { style: "font-size: 26px; font-weight: 500;", "{category}" }
                div { style: "font-size: 15px; color: rgba(255,255,255,0.9);", "{blurb}" }
            }
        }
    }
}

#[component]
fn QuickLinks() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; font-size: 15px;",
            for (label, min, max) in PRICE_BANDS {
                Link {
                    key: "{label}",
                    to: quick_link(PriceRange::new(min, max), SortBy::PriceAsc),
                    class: "x-filter-chip",
                    "{label}"
                }
            }
            Link {
                to: quick_link(PriceRange::default(), SortBy::Newest),
                class: "x-filter-chip",
                "New arrivals"
            }
            Link {
                to: quick_link(PriceRange::default(), SortBy::Rating),
                class: "x-filter-chip",
                "Top rated"
            }
        }
    }
}

#[component]
fn HomeSearchInput() -> Element {
    let nav = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                border: 1px solid rgba(0,0,0,0.2);
                padding: 10px 14px;
                height: 42px;
                width: 520px;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search spirits, wine and more",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    font-size: 14px;
                ",
                oninput: move |e: Event<FormData>| search_q.set(e.value()),
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Enter {
                        let query = url_codec::with_search_text("", &search_q.read());
                        nav.push(Route::SearchPage { query: FilterQuery::from(query) });
                    }
                },
            }
        }
    }
}
