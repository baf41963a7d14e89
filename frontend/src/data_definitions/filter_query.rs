//! Query-string route segment for the listing pages.

use std::fmt::Display;

use common::{filter_selection::FilterSelection, url_codec};
use serde::{Deserialize, Serialize};

/// The raw query string of a listing route, without the leading `?`.
///
/// The router parses it with `From<&str>` and prints it with `Display`;
/// filter semantics live in [`url_codec`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FilterQuery(pub String);

impl From<&str> for FilterQuery {
    fn from(query: &str) -> Self {
        FilterQuery(query.strip_prefix('?').unwrap_or(query).to_string())
    }
}

impl From<String> for FilterQuery {
    fn from(query: String) -> Self {
        FilterQuery::from(query.as_str())
    }
}

impl Display for FilterQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FilterQuery {
    pub fn from_selection(selection: &FilterSelection) -> Self {
        FilterQuery(url_codec::encode(selection))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn selection(&self) -> FilterSelection {
        url_codec::decode(&self.0)
    }

    pub fn search_text(&self) -> Option<String> {
        url_codec::search_text(&self.0)
    }
}
