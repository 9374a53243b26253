//! Ingredient matching between a pantry and a recipe.
//!
//! Matching is by ingredient identity only: names are normalized, and
//! quantity never affects the result. A plural/singular fallback lets
//! "carrot" match "carrots".

use std::collections::BTreeSet;

use serde::Serialize;

use crate::ingredient_parser::clean_item;
use crate::types::Recipe;

/// The user's available ingredients, normalized for lookup.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    names: BTreeSet<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw ingredient name; runs through the same cleaning as
    /// catalog lines so "Chopped Carrots" and "carrots" agree.
    pub fn add(&mut self, raw: &str) {
        let name = clean_item(raw);
        if !name.is_empty() {
            self.names.insert(name);
        }
    }

    pub fn extend<I, S>(&mut self, raws: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in raws {
            self.add(raw.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Membership with plural/singular fallback ("carrot" matches
    /// "carrots", "tomato" matches "tomatoes", and vice versa).
    pub fn contains(&self, name: &str) -> bool {
        if self.names.contains(name) {
            return true;
        }
        if self.names.contains(&format!("{name}s")) || self.names.contains(&format!("{name}es")) {
            return true;
        }
        if let Some(singular) = name.strip_suffix("es") {
            if self.names.contains(singular) {
                return true;
            }
        }
        if let Some(singular) = name.strip_suffix('s') {
            if self.names.contains(singular) {
                return true;
            }
        }
        false
    }

    /// Normalized names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Result of matching one recipe against the pantry.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Recipe ingredients found in the pantry, in recipe order.
    pub matched: Vec<String>,
    /// Recipe ingredients absent from the pantry, in recipe order.
    pub missing: Vec<String>,
}

impl CoverageReport {
    /// Fraction of required ingredients available, always in [0, 1].
    /// Catalog validation rejects ingredient-less recipes, so the
    /// denominator is never zero for catalog recipes.
    pub fn fraction(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Match a recipe's required ingredients against the pantry.
pub fn match_recipe(pantry: &Pantry, recipe: &Recipe) -> CoverageReport {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for ing in &recipe.ingredients {
        if pantry.contains(&ing.name) {
            matched.push(ing.name.clone());
        } else {
            missing.push(ing.name.clone());
        }
    }

    CoverageReport { matched, missing }
}
