//! Ingredient nutrition lookup.
//!
//! The scorer reads nutrition facts through the [`NutritionLookup`]
//! trait so callers can plug in their own source. The shipped
//! implementation is a table embedded at compile time from
//! `data/nutrition.json`, with an alias map and plural fallback.
//! All facts are per 100 g of the ingredient.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Nutrition facts per 100 g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub kcal: f64,
    pub sugar_g: f64,
    pub saturated_fat_g: f64,
    pub fiber_g: f64,
}

/// Source of per-ingredient nutrition facts.
pub trait NutritionLookup {
    /// Facts for a normalized ingredient name, or `None` when unknown.
    fn facts(&self, ingredient: &str) -> Option<NutritionFacts>;
}

/// Plain map lookup, handy for tests and custom tables.
impl NutritionLookup for HashMap<String, NutritionFacts> {
    fn facts(&self, ingredient: &str) -> Option<NutritionFacts> {
        self.get(ingredient).copied()
    }
}

#[derive(Deserialize)]
struct NutritionDataFile {
    ingredients: HashMap<String, NutritionFacts>,
    aliases: HashMap<String, String>,
}

static DATA: LazyLock<NutritionDataFile> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/nutrition.json"))
        .expect("nutrition.json should be valid JSON")
});

/// The embedded nutrition table.
///
/// Lookup order:
/// 1. Direct lookup in the ingredient table
/// 2. Lookup via aliases
/// 3. Plural/singular variations of the name
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedNutrition;

impl NutritionLookup for EmbeddedNutrition {
    fn facts(&self, ingredient: &str) -> Option<NutritionFacts> {
        let name = ingredient.trim().to_lowercase();

        if let Some(&facts) = DATA.ingredients.get(&name) {
            return Some(facts);
        }

        if let Some(canonical) = DATA.aliases.get(&name) {
            if let Some(&facts) = DATA.ingredients.get(canonical) {
                return Some(facts);
            }
        }

        try_plural_variations(&name)
    }
}

/// Try plural/singular variations of a name against table and aliases.
fn try_plural_variations(name: &str) -> Option<NutritionFacts> {
    let mut variants = vec![format!("{name}s"), format!("{name}es")];
    if let Some(singular) = name.strip_suffix("es") {
        variants.push(singular.to_string());
    }
    if let Some(singular) = name.strip_suffix('s') {
        variants.push(singular.to_string());
    }

    for variant in variants {
        if let Some(&facts) = DATA.ingredients.get(&variant) {
            return Some(facts);
        }
        if let Some(canonical) = DATA.aliases.get(&variant) {
            if let Some(&facts) = DATA.ingredients.get(canonical) {
                return Some(facts);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_lookup() {
        assert!(EmbeddedNutrition.facts("carrot").is_some());
        assert!(EmbeddedNutrition.facts("potato").is_some());
        assert!(EmbeddedNutrition.facts("beef").is_some());
    }

    #[test]
    fn test_alias_lookup() {
        // "spuds" is an alias for potato
        assert_eq!(
            EmbeddedNutrition.facts("spuds"),
            EmbeddedNutrition.facts("potato")
        );
        assert_eq!(
            EmbeddedNutrition.facts("all-purpose flour"),
            EmbeddedNutrition.facts("flour")
        );
    }

    #[test]
    fn test_plural_fallback() {
        assert_eq!(
            EmbeddedNutrition.facts("carrots"),
            EmbeddedNutrition.facts("carrot")
        );
        assert_eq!(
            EmbeddedNutrition.facts("tomatoes"),
            EmbeddedNutrition.facts("tomato")
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            EmbeddedNutrition.facts("Carrot"),
            EmbeddedNutrition.facts("carrot")
        );
    }

    #[test]
    fn test_unknown_ingredient() {
        assert!(EmbeddedNutrition.facts("unicorn tears").is_none());
    }

    #[test]
    fn test_map_lookup() {
        let mut table = HashMap::new();
        table.insert(
            "gruel".to_string(),
            NutritionFacts {
                kcal: 50.0,
                sugar_g: 0.0,
                saturated_fat_g: 0.1,
                fiber_g: 1.0,
            },
        );
        assert!(table.facts("gruel").is_some());
        assert!(table.facts("caviar").is_none());
    }
}
