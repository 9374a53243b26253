use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single measurement (amount + unit pair), kept as parsed strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quantity {
    pub amount: Option<String>,
    pub unit: Option<String>,
}

/// An ingredient required by a recipe.
///
/// `name` is the cleaned, lowercase item name and is the ingredient's
/// identity: matching and nutrition lookups compare names only, never
/// quantities. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    /// Grocery category, when the name matches a known keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The raw catalog line this ingredient was parsed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// A recipe as held by the catalog. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    /// Dietary tags the recipe claims to satisfy (lowercase).
    pub tags: BTreeSet<String>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }
}

/// Normalize a name for case-insensitive identity comparison.
pub fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase()
}
