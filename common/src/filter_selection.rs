//! Filter selection shared by the shop and search listing pages.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 2000;

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Relevance,
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Relevance,
        SortBy::Newest,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
        SortBy::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Relevance => "Relevance",
            SortBy::Newest => "Newest Arrivals",
            SortBy::PriceAsc => "Price: Low to High",
            SortBy::PriceDesc => "Price: High to Low",
            SortBy::Rating => "Top Rated",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortParseError {
    Unknown(String),
}

impl std::fmt::Display for SortParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(value) => write!(f, "Unknown sort order: {:?}", value),
        }
    }
}

impl std::error::Error for SortParseError {}

impl FromStr for SortBy {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| SortParseError::Unknown(s.to_string()))
    }
}

/// Inclusive price bounds. Bounds are always ordered, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPriceRange")]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: DEFAULT_MIN_PRICE, max: DEFAULT_MAX_PRICE }
    }
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: u32,
    max: u32,
}

impl From<RawPriceRange> for PriceRange {
    fn from(raw: RawPriceRange) -> Self {
        PriceRange::new(raw.min, raw.max)
    }
}

impl From<(u32, u32)> for PriceRange {
    fn from((a, b): (u32, u32)) -> Self {
        PriceRange::new(a, b)
    }
}

/// The facet selection of a listing page.
///
/// `category` is never empty and `brands` holds no empty or repeated names;
/// the constructors and [`FilterSelection::apply`] are the only writers.
/// `brands` keeps insertion order for display but compares as a set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawFilterSelection")]
pub struct FilterSelection {
    category: Option<String>,
    brands: Vec<String>,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawFilterSelection {
    category: Option<String>,
    brands: Vec<String>,
    price_range: PriceRange,
    sort_by: SortBy,
}

impl From<RawFilterSelection> for FilterSelection {
    fn from(raw: RawFilterSelection) -> Self {
        let mut selection = FilterSelection {
            price_range: raw.price_range,
            sort_by: raw.sort_by,
            ..Default::default()
        };
        selection.set_category(raw.category);
        for brand in raw.brands {
            selection.add_brand(brand);
        }
        selection
    }
}

fn sorted(brands: &[String]) -> Vec<&str> {
    let mut brands = brands.iter().map(String::as_str).collect::<Vec<_>>();
    brands.sort_unstable();
    brands
}

impl PartialEq for FilterSelection {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.price_range == other.price_range
            && self.sort_by == other.sort_by
            && sorted(&self.brands) == sorted(&other.brands)
    }
}

impl Eq for FilterSelection {}

impl FilterSelection {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(Some(category.into()));
        self
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands.clear();
        for brand in brands {
            self.add_brand(brand);
        }
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// An empty category means no category.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Sort order is not counted as a filter.
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || !self.brands.is_empty() || !self.price_range.is_default()
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.brands.iter().any(|b| b == brand)
    }

    /// Appends `brand` unless it is empty or already selected.
    pub fn add_brand(&mut self, brand: impl Into<String>) -> bool {
        let brand = brand.into();
        if brand.is_empty() || self.has_brand(&brand) {
            return false;
        }
        self.brands.push(brand);
        true
    }

    pub fn applied_filters(&self) -> Vec<AppliedFilter> {
        let mut applied = Vec::new();
        if let Some(category) = &self.category {
            applied.push(AppliedFilter::Category(category.clone()));
        }
        for brand in &self.brands {
            applied.push(AppliedFilter::Brand(brand.clone()));
        }
        if !self.price_range.is_default() {
            applied.push(AppliedFilter::PriceRange(self.price_range));
        }
        applied
    }

    /// Applies `update`, returning whether the selection changed.
    pub fn apply(&mut self, update: FilterUpdate) -> bool {
        let before = self.clone();
        match update {
            FilterUpdate::Category(category) => {
                self.set_category(category);
            }
            FilterUpdate::ClearCategory => {
                self.category = None;
            }
            FilterUpdate::Brands(brands) => {
                self.brands.clear();
                for brand in brands {
                    self.add_brand(brand);
                }
            }
            FilterUpdate::ToggleBrand(brand) => {
                if self.has_brand(&brand) {
                    self.brands.retain(|b| *b != brand);
                } else {
                    self.add_brand(brand);
                }
            }
            FilterUpdate::PriceRange(range) => {
                self.price_range = range;
            }
            FilterUpdate::SortBy(sort_by) => {
                self.sort_by = sort_by;
            }
        }
        // brand order alone is not a change, keep the previous ordering
        if *self == before {
            *self = before;
            return false;
        }
        true
    }
}

/// A single-field write to a [`FilterSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterUpdate {
    Category(Option<String>),
    ClearCategory,
    Brands(Vec<String>),
    ToggleBrand(String),
    PriceRange(PriceRange),
    SortBy(SortBy),
}

/// A removable chip describing one active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedFilter {
    Category(String),
    Brand(String),
    PriceRange(PriceRange),
}

impl AppliedFilter {
    pub fn label(&self) -> String {
        match self {
            AppliedFilter::Category(category) => format!("Category: {}", category),
            AppliedFilter::Brand(brand) => format!("Brand: {}", brand),
            AppliedFilter::PriceRange(range) => format!("Price: ${} - ${}+", range.min(), range.max()),
        }
    }

    pub fn removal(&self) -> FilterUpdate {
        match self {
            AppliedFilter::Category(_) => FilterUpdate::ClearCategory,
            AppliedFilter::Brand(brand) => FilterUpdate::ToggleBrand(brand.clone()),
            AppliedFilter::PriceRange(_) => FilterUpdate::PriceRange(PriceRange::default()),
        }
    }
}
