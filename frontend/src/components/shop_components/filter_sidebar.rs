//! Category, price and brand facets for the listing pages.

use common::{
    filter_selection::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterUpdate, PriceRange},
    product::ShopFacets,
};
use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{md_content_icons::MdFilterList, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}},
};

use crate::{
    api::shop_api::get_facets,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
};
use super::filter_url_sync::FilterSyncContext;

const PRICE_STEP: u32 = 10;

// shown when the catalog has no categories yet
const FALLBACK_CATEGORIES: [&str; 8] = ["Whiskey", "Vodka", "Gin", "Rum", "Tequila", "Wine", "Beer", "Liqueur"];

#[component]
pub fn FilterSidebar() -> Element {
    let facets = use_resource(get_facets);
    let facets = facets.read();
    let facets = match facets.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(f)) => f.clone(),
        None => return rsx! { LoadingIndicator {} },
    };
    let ShopFacets { mut categories, brands } = facets;
    if categories.is_empty() {
        categories = FALLBACK_CATEGORIES.iter().map(|c| c.to_string()).collect();
    }

    rsx! {
        div {
            id: "x-filter-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 240px;
                padding: 16px;
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 18px; font-weight: 500;",
                Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
                "Filters"
            }
            FacetSection {
                title: "Categories".to_string(),
                CategoryFacet { categories }
            }
            FacetSection {
                title: "Price Range".to_string(),
                PriceFacet {}
            }
            FacetSection {
                title: "Brands".to_string(),
                BrandFacet { brands }
            }
        }
    }
}

#[component]
fn FacetSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; border-bottom: 1px solid rgba(0,0,0,0.1); padding-bottom: 16px;",
            div { style: "font-size: 14px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.04em;", "{title}" }
            {children}
        }
    }
}

#[component]
fn FacetCheckbox(label: String, checked: bool, on_toggle: Callback<()>) -> Element {
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                border: none;
                background: none;
                cursor: pointer;
                padding: 2px 0;
                font-size: 14px;
                text-align: left;
            ",
            onclick: move |_| on_toggle(()),
            if checked {
                Icon { icon: MdCheckBox, style: "width: 18px; height: 18px; color: #8C3B1F;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 18px; height: 18px; color: #6B7280;" }
            }
            "{label}"
        }
    }
}

#[component]
fn CategoryFacet(categories: Vec<String>) -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();
    let current = use_memo(move || selection.read().category().map(str::to_string));

    rsx! {
        for category in categories {
            FacetCheckbox {
                key: "{category}",
                label: category.clone(),
                checked: current().is_some_and(|c| c.eq_ignore_ascii_case(&category)),
                on_toggle: move |_| {
                    let checked = current().is_some_and(|c| c.eq_ignore_ascii_case(&category));
                    if checked {
                        filters.apply(FilterUpdate::ClearCategory);
                    } else {
                        filters.apply(FilterUpdate::Category(Some(category.to_lowercase())));
                    }
                },
            }
        }
    }
}

#[component]
fn BrandFacet(brands: Vec<String>) -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; max-height: 280px; overflow-y: auto;",
            for brand in brands {
                FacetCheckbox {
                    key: "{brand}",
                    label: brand.clone(),
                    checked: selection.read().has_brand(&brand),
                    on_toggle: move |_| filters.apply(FilterUpdate::ToggleBrand(brand.clone())),
                }
            }
        }
    }
}

fn parse_bound(value: &str, fallback: u32) -> u32 {
    value.trim().parse::<u32>().unwrap_or(fallback)
}

#[component]
fn PriceFacet() -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();
    let range = use_memo(move || selection.read().price_range);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 13px;",
            label { "Min" }
            input {
                r#type: "range",
                min: "{DEFAULT_MIN_PRICE}",
                max: "{DEFAULT_MAX_PRICE}",
                step: "{PRICE_STEP}",
                value: "{range().min()}",
                onchange: move |event: Event<FormData>| {
                    let current = range();
                    let min = parse_bound(&event.value(), current.min());
                    filters.apply(FilterUpdate::PriceRange(PriceRange::new(min, current.max())));
                },
            }
            label { "Max" }
            input {
                r#type: "range",
                min: "{DEFAULT_MIN_PRICE}",
                max: "{DEFAULT_MAX_PRICE}",
                step: "{PRICE_STEP}",
                value: "{range().max()}",
                onchange: move |event: Event<FormData>| {
                    let current = range();
                    let max = parse_bound(&event.value(), current.max());
                    filters.apply(FilterUpdate::PriceRange(PriceRange::new(current.min(), max)));
                },
            }
            div {
                style: "display: flex; justify-content: space-between; color: #6B7280;",
                span { "${range().min()}" }
                span { "${range().max()}+" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bound_keeps_fallback() {
        assert_eq!(parse_bound("250", 0), 250);
        assert_eq!(parse_bound("", 40), 40);
        assert_eq!(parse_bound("-1", 2000), 2000);
    }
}
