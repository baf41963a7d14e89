use common::product::Product;

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    subcategory: Option<&str>,
    price: f64,
    discount_price: Option<f64>,
    rating: f64,
    review_count: u64,
    in_stock: bool,
    created_at: &str,
) -> Product {
    let slug = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    Product {
        id: id.to_string(),
        name: name.to_string(),
        slug,
        brand: brand.to_string(),
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        price,
        discount_price,
        rating,
        review_count,
        in_stock,
        created_at: created_at.to_string(),
        image: None,
    }
}

pub fn builtin_catalog() -> Vec<Product> {
    vec![
        product("wh-001", "Lagavulin 16 Year Old", "Lagavulin", "Whiskey", Some("Scotch"), 99.99, None, 4.9, 342, true, "2026-06-02T10:00:00Z"),
        product("wh-002", "Ardbeg Uigeadail", "Ardbeg", "Whiskey", Some("Scotch"), 89.99, Some(79.99), 4.8, 188, true, "2026-08-14T10:00:00Z"),
        product("wh-003", "Buffalo Trace Bourbon", "Buffalo Trace", "Whiskey", Some("Bourbon"), 29.99, None, 4.5, 410, true, "2026-03-21T10:00:00Z"),
        product("wh-004", "Yamazaki 12 Year Old", "Suntory", "Whisky", Some("Japanese"), 189.99, None, 4.7, 96, true, "2026-09-30T10:00:00Z"),
        product("wh-005", "Macallan 25 Sherry Oak", "Macallan", "Whiskey", Some("Scotch"), 1899.00, None, 4.9, 12, false, "2026-01-11T10:00:00Z"),
        product("vo-001", "Grey Goose Vodka", "Grey Goose", "Vodka", Some("Premium"), 34.99, Some(29.99), 4.8, 215, true, "2026-10-02T10:00:00Z"),
        product("vo-002", "Belvedere Pure", "Belvedere", "Vodka", Some("Premium"), 36.99, None, 4.6, 133, true, "2026-05-19T10:00:00Z"),
        product("gi-001", "Hendrick's Gin", "Hendrick's", "Gin", None, 38.99, None, 4.7, 301, true, "2026-04-08T10:00:00Z"),
        product("gi-002", "Tanqueray No. Ten", "Tanqueray", "Gin", None, 32.99, None, 4.6, 154, true, "2026-07-27T10:00:00Z"),
        product("rum-001", "Ron Zacapa 23", "Ron Zacapa", "Rum", Some("Premium"), 54.99, None, 4.8, 112, true, "2026-09-04T10:00:00Z"),
        product("rum-002", "Diplomatico Reserva Exclusiva", "Diplomatico", "Rum", None, 39.99, Some(34.99), 4.7, 98, true, "2026-02-16T10:00:00Z"),
        product("te-001", "Clase Azul Reposado", "Clase Azul", "Tequila", Some("Reposado"), 159.99, None, 4.9, 77, true, "2026-08-01T10:00:00Z"),
        product("te-002", "Don Julio 1942", "Don Julio", "Tequila", Some("Anejo"), 179.99, None, 4.8, 143, true, "2026-06-25T10:00:00Z"),
        product("wi-001", "Chateau Margaux 2015", "Chateau Margaux", "Red Wine", Some("Bordeaux"), 899.00, None, 4.9, 23, true, "2026-03-03T10:00:00Z"),
        product("wi-002", "Cloudy Bay Sauvignon Blanc", "Cloudy Bay", "White Wine", None, 29.99, None, 4.5, 260, true, "2026-07-09T10:00:00Z"),
        product("wi-003", "Dom Perignon Vintage 2013", "Dom Perignon", "Champagne", None, 259.99, Some(239.99), 4.8, 88, true, "2026-09-18T10:00:00Z"),
        product("li-001", "Grand Marnier Cordon Rouge", "Grand Marnier", "Liqueur", None, 42.99, None, 4.6, 120, true, "2026-05-05T10:00:00Z"),
        product("ac-001", "Crystal Rocks Glass Set", "Riedel", "Glassware", None, 59.99, None, 4.4, 45, true, "2026-04-29T10:00:00Z"),
        product("ac-002", "Copper Cocktail Shaker", "Cocktail Kingdom", "Bar Tools", None, 34.99, None, 4.3, 61, true, "2026-08-22T10:00:00Z"),
    ]
}
