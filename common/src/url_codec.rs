//! Query-string codec for [`FilterSelection`].
//!
//! Decoding never fails: a malformed or unknown value is replaced by the
//! field default. Encoding is canonical and minimal, default fields are
//! omitted and keys are written in the order `category`, `brand`*,
//! `minPrice`, `maxPrice`, `sort`.

use url::form_urlencoded;

use crate::filter_selection::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, FilterSelection, PriceRange, SortBy};

pub const CATEGORY_PARAM: &str = "category";
pub const BRAND_PARAM: &str = "brand";
pub const MIN_PRICE_PARAM: &str = "minPrice";
pub const MAX_PRICE_PARAM: &str = "maxPrice";
pub const SORT_PARAM: &str = "sort";
pub const SEARCH_TEXT_PARAM: &str = "q";
pub const PAGE_PARAM: &str = "page";

/// Every key owned by the codec. Anything else in a query belongs to someone else.
pub const FILTER_PARAMS: [&str; 5] = [CATEGORY_PARAM, BRAND_PARAM, MIN_PRICE_PARAM, MAX_PRICE_PARAM, SORT_PARAM];

fn query_body(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

fn is_filter_param(key: &str) -> bool {
    FILTER_PARAMS.contains(&key)
}

fn parse_price(key: &str, value: &str, default: u32) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(price) => price,
        Err(_) => {
            tracing::debug!("ignoring malformed {}={:?}, using {}", key, value, default);
            default
        }
    }
}

/// Decodes a query string (with or without the leading `?`) into a selection.
///
/// Single-valued keys take their first occurrence; `brand` may repeat.
pub fn decode(query: &str) -> FilterSelection {
    let mut selection = FilterSelection::default();
    let mut min_price = None;
    let mut max_price = None;
    let mut sort_by = None;

    for (key, value) in form_urlencoded::parse(query_body(query).as_bytes()) {
        match &*key {
            CATEGORY_PARAM => {
                if selection.category().is_none() {
                    selection.set_category(Some(value.into_owned()));
                }
            }
            BRAND_PARAM => {
                selection.add_brand(value.into_owned());
            }
            MIN_PRICE_PARAM => {
                if min_price.is_none() {
                    min_price = Some(parse_price(MIN_PRICE_PARAM, &value, DEFAULT_MIN_PRICE));
                }
            }
            MAX_PRICE_PARAM => {
                if max_price.is_none() {
                    max_price = Some(parse_price(MAX_PRICE_PARAM, &value, DEFAULT_MAX_PRICE));
                }
            }
            SORT_PARAM => {
                if sort_by.is_none() {
                    sort_by = Some(value.parse::<SortBy>().unwrap_or_else(|e| {
                        tracing::debug!("{}, using {}", e, SortBy::default());
                        SortBy::default()
                    }));
                }
            }
            _ => {}
        }
    }

    selection.price_range = PriceRange::new(
        min_price.unwrap_or(DEFAULT_MIN_PRICE),
        max_price.unwrap_or(DEFAULT_MAX_PRICE),
    );
    selection.sort_by = sort_by.unwrap_or_default();
    selection
}

fn append_selection(serializer: &mut form_urlencoded::Serializer<'_, String>, selection: &FilterSelection) {
    if let Some(category) = selection.category() {
        serializer.append_pair(CATEGORY_PARAM, category);
    }
    for brand in selection.brands() {
        serializer.append_pair(BRAND_PARAM, brand);
    }
    if selection.price_range.min() != DEFAULT_MIN_PRICE {
        serializer.append_pair(MIN_PRICE_PARAM, &selection.price_range.min().to_string());
    }
    if selection.price_range.max() != DEFAULT_MAX_PRICE {
        serializer.append_pair(MAX_PRICE_PARAM, &selection.price_range.max().to_string());
    }
    if selection.sort_by != SortBy::default() {
        serializer.append_pair(SORT_PARAM, selection.sort_by.as_str());
    }
}

/// Encodes the non-default fields of `selection`, without a leading `?`.
pub fn encode(selection: &FilterSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    append_selection(&mut serializer, selection);
    serializer.finish()
}

/// Replaces the filter keys of `existing` with the encoding of `selection`.
///
/// Non-filter keys keep their relative order and come first.
pub fn merge_into(existing: &str, selection: &FilterSelection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(query_body(existing).as_bytes()) {
        if !is_filter_param(&key) {
            serializer.append_pair(&key, &value);
        }
    }
    append_selection(&mut serializer, selection);
    serializer.finish()
}

/// The canonical form of `query`: same meaning, filter keys re-encoded.
pub fn canonicalize(query: &str) -> String {
    merge_into(query, &decode(query))
}

/// Sets the category of `existing` to `slug`, leaving every other key in place.
pub fn with_category(existing: &str, slug: &str) -> String {
    let mut selection = decode(existing);
    selection.set_category(Some(slug.to_string()));
    merge_into(existing, &selection)
}

/// The free-text search of a search page, `q`.
pub fn search_text(query: &str) -> Option<String> {
    form_urlencoded::parse(query_body(query).as_bytes())
        .find(|(key, _)| key == SEARCH_TEXT_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Sets `q` of `existing` to `text` (removing it when blank); filters are kept.
pub fn with_search_text(existing: &str, text: &str) -> String {
    let text = text.trim();
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !text.is_empty() {
        serializer.append_pair(SEARCH_TEXT_PARAM, text);
    }
    for (key, value) in form_urlencoded::parse(query_body(existing).as_bytes()) {
        if key != SEARCH_TEXT_PARAM && !is_filter_param(&key) {
            serializer.append_pair(&key, &value);
        }
    }
    append_selection(&mut serializer, &decode(existing));
    serializer.finish()
}

/// Zero-based listing page, `page`. Malformed values mean the first page.
pub fn page_number(query: &str) -> u64 {
    form_urlencoded::parse(query_body(query).as_bytes())
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
