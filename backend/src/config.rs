//! Environment configuration for the listing backend.

use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Optional JSON catalog; the built-in catalog is used when unset.
pub fn get_catalog_path() -> Option<PathBuf> {
    std::env::var("SHOP_CATALOG_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

pub fn get_page_size() -> u64 {
    parse_page_size(std::env::var("SHOP_PAGE_SIZE").ok().as_deref())
}

fn parse_page_size(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_falls_back() {
        assert_eq!(parse_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("0")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("lots")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some(" 24 ")), 24);
    }
}
