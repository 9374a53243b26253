//! Ingredient categorization.
//!
//! Maps ingredient names to grocery categories based on keyword matching.
//! Category data is loaded from `data/categories.json` at compile time.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

#[derive(Deserialize)]
struct CategoriesData {
    categories: HashMap<String, String>,
}

/// Keyword -> category map, sorted by keyword length (longest first) so
/// more specific matches are tried before general ones.
static CATEGORY_MAP: LazyLock<Vec<(String, String)>> = LazyLock::new(|| {
    let json = include_str!("../data/categories.json");
    let data: CategoriesData = serde_json::from_str(json).expect("categories.json should be valid");

    let mut map: Vec<(String, String)> = data.categories.into_iter().collect();
    map.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    map
});

/// Categorize an ingredient by name.
///
/// Returns `None` when no keyword matches; matching is case-insensitive
/// keyword containment.
pub fn categorize(item: &str) -> Option<&'static str> {
    static STATIC_CATEGORIES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
        let categories = [
            "Produce",
            "Meat & Seafood",
            "Dairy & Eggs",
            "Grains & Pasta",
            "Baking",
            "Spices & Seasonings",
            "Oils & Condiments",
            "Legumes & Nuts",
        ];
        categories.iter().map(|&c| (c.to_string(), c)).collect()
    });

    let lower = item.to_lowercase();
    for (keyword, category) in CATEGORY_MAP.iter() {
        if lower.contains(keyword.as_str()) {
            return STATIC_CATEGORIES.get(category).copied();
        }
    }

    None
}
