pub mod catalog;
pub mod categorizer;
pub mod error;
pub mod ingredient_parser;
pub mod matcher;
pub mod nutrition;
pub mod restrictions;
pub mod score;
pub mod selector;
pub mod types;

pub use catalog::{RecipeCatalog, RecipeRecord};
pub use error::{CatalogError, ScoreError, SelectError};
pub use matcher::{match_recipe, CoverageReport, Pantry};
pub use nutrition::{EmbeddedNutrition, NutritionFacts, NutritionLookup};
pub use restrictions::DietaryRestriction;
pub use score::{score_recipe, HealthinessScore};
pub use selector::{Candidate, SelectionSession, SessionState};
pub use types::{Ingredient, Quantity, Recipe};
