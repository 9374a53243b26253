use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog contains no recipes")]
    Empty,

    #[error("Duplicate recipe name: {0}")]
    DuplicateRecipe(String),

    #[error("Recipe {recipe:?} has no ingredients")]
    EmptyRecipe { recipe: String },

    #[error("Recipe {recipe:?} lists ingredient {ingredient:?} more than once")]
    DuplicateIngredient { recipe: String, ingredient: String },

    #[error("Recipe {recipe:?} claims tag {tag:?} but contains {ingredient:?}")]
    InconsistentTag {
        recipe: String,
        tag: String,
        ingredient: String,
    },
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("No nutrition data for ingredient {ingredient:?}")]
    MissingNutritionData { ingredient: String },
}

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Unknown dietary restriction: {0}")]
    UnknownRestriction(String),

    #[error("No available ingredients were provided")]
    EmptyPantry,

    #[error("No recipe matches the given ingredients and restrictions")]
    NoMatchingRecipe,

    #[error("Selection index {index} is out of range ({count} candidates)")]
    InvalidSelection { index: usize, count: usize },

    #[error("Session is not presenting candidates")]
    NotPresenting,
}
