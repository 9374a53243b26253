//! The recipe catalog.
//!
//! Built once from a JSON file (or in-memory records) at program start
//! and read-only thereafter. All structural validation happens here:
//! malformed records fail the load with a named error instead of
//! propagating downstream.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::categorizer;
use crate::error::CatalogError;
use crate::ingredient_parser;
use crate::restrictions;
use crate::types::{normalize_name, Recipe};

/// A recipe record as it appears in the catalog file. Ingredients are
/// raw lines ("2 cups chopped carrots"); parsing happens at load.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Load a catalog from a JSON file: an array of recipe records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records: Vec<RecipeRecord> = serde_json::from_str(&contents)?;
        Self::from_records(records)
    }

    /// Build a catalog from records, validating every recipe.
    pub fn from_records(records: Vec<RecipeRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen_names = BTreeSet::new();
        let mut recipes = Vec::with_capacity(records.len());

        for record in records {
            if !seen_names.insert(normalize_name(&record.name)) {
                return Err(CatalogError::DuplicateRecipe(record.name));
            }
            recipes.push(build_recipe(record)?);
        }

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let wanted = normalize_name(name);
        self.recipes
            .iter()
            .find(|r| normalize_name(&r.name) == wanted)
    }
}

fn build_recipe(record: RecipeRecord) -> Result<Recipe, CatalogError> {
    let mut ingredients = ingredient_parser::parse_lines(&record.ingredients);
    if ingredients.is_empty() {
        return Err(CatalogError::EmptyRecipe {
            recipe: record.name,
        });
    }

    // Ingredient names must be unique within a recipe.
    let mut seen = BTreeSet::new();
    for ing in &ingredients {
        if !seen.insert(ing.name.clone()) {
            return Err(CatalogError::DuplicateIngredient {
                recipe: record.name,
                ingredient: ing.name.clone(),
            });
        }
    }

    for ing in &mut ingredients {
        ing.category = categorizer::categorize(&ing.name).map(str::to_string);
    }

    let tags: BTreeSet<String> = record.tags.iter().map(|t| normalize_name(t)).collect();

    // A claimed tag must be consistent with the ingredient list: if the
    // tag names a known restriction, none of that restriction's
    // forbidden keywords may appear. Checked here, not at filter time.
    for tag in &tags {
        if let Some(restriction) = restrictions::builtin(tag) {
            if let Some(ing) = restriction.violating_ingredient(&ingredients) {
                return Err(CatalogError::InconsistentTag {
                    recipe: record.name,
                    tag: tag.clone(),
                    ingredient: ing.name.clone(),
                });
            }
        }
    }

    Ok(Recipe {
        name: record.name,
        ingredients,
        steps: record.steps,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ingredients: &[&str], tags: &[&str]) -> RecipeRecord {
        RecipeRecord {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec!["Cook.".to_string()],
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = RecipeCatalog::from_records(vec![
            record("Veggie Stew", &["2 carrots", "2 potatoes", "1 onion"], &["vegetarian"]),
            record("Beef Stew", &["1 lb beef", "2 potatoes", "1 onion"], &[]),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("veggie stew").is_some());
        assert!(catalog.get("Gazpacho").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            RecipeCatalog::from_records(vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let err = RecipeCatalog::from_records(vec![
            record("Stew", &["1 onion"], &[]),
            record("stew", &["2 carrots"], &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRecipe(_)));
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let err = RecipeCatalog::from_records(vec![record(
            "Oniony Onions",
            &["1 onion", "2 cups chopped onion"],
            &[],
        )])
        .unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateIngredient { ingredient, .. } if ingredient == "onion")
        );
    }

    #[test]
    fn test_empty_recipe_rejected() {
        let err = RecipeCatalog::from_records(vec![record("Air", &[], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyRecipe { .. }));
    }

    #[test]
    fn test_inconsistent_tag_rejected() {
        let err = RecipeCatalog::from_records(vec![record(
            "Beef Surprise",
            &["1 lb beef", "1 onion"],
            &["vegetarian"],
        )])
        .unwrap_err();
        assert!(
            matches!(err, CatalogError::InconsistentTag { tag, ingredient, .. }
                if tag == "vegetarian" && ingredient == "beef")
        );
    }

    #[test]
    fn test_unknown_tag_is_allowed() {
        // Tags that don't name a built-in restriction are plain labels.
        let catalog =
            RecipeCatalog::from_records(vec![record("Toast", &["2 slices bread"], &["comfort"])])
                .unwrap();
        assert!(catalog.recipes()[0].has_tag("comfort"));
    }

    #[test]
    fn test_categories_assigned() {
        let catalog =
            RecipeCatalog::from_records(vec![record("Mash", &["5 potatoes", "1 tbsp butter"], &[])])
                .unwrap();
        let ings = &catalog.recipes()[0].ingredients;
        assert_eq!(ings[0].category.as_deref(), Some("Produce"));
        assert_eq!(ings[1].category.as_deref(), Some("Dairy & Eggs"));
    }
}
