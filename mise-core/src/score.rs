//! Healthiness scoring.
//!
//! A recipe's healthiness score is a pure function of its ingredient
//! list and the nutrition table: per-ingredient facts are mapped onto
//! [0, 100] component sub-scores by fixed piecewise-linear curves,
//! averaged across ingredients, and combined with fixed weights.
//! Scoring the same recipe twice always yields the identical score.

use serde::Serialize;

use crate::error::ScoreError;
use crate::nutrition::{NutritionFacts, NutritionLookup};
use crate::types::Recipe;

/// Component weights. Must sum to 1.0.
const WEIGHT_ENERGY: f64 = 0.35;
const WEIGHT_SUGAR: f64 = 0.25;
const WEIGHT_SAT_FAT: f64 = 0.25;
const WEIGHT_FIBER: f64 = 0.15;

/// A healthiness score in [0, 100] with its component sub-scores.
/// Higher is healthier. Recomputed on demand, never stored on the
/// recipe itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthinessScore {
    pub total: f64,
    pub energy: f64,
    pub sugar: f64,
    pub saturated_fat: f64,
    pub fiber: f64,
}

/// Score a recipe against a nutrition source.
///
/// Fails with `MissingNutritionData` on the first ingredient the source
/// does not know — an unknown ingredient is never silently scored as
/// zero. The caller decides whether to drop the recipe or surface the
/// error.
pub fn score_recipe(
    recipe: &Recipe,
    nutrition: &dyn NutritionLookup,
) -> Result<HealthinessScore, ScoreError> {
    let mut energy_sum = 0.0;
    let mut sugar_sum = 0.0;
    let mut sat_fat_sum = 0.0;
    let mut fiber_sum = 0.0;

    for ing in &recipe.ingredients {
        let facts = nutrition
            .facts(&ing.name)
            .ok_or_else(|| ScoreError::MissingNutritionData {
                ingredient: ing.name.clone(),
            })?;
        energy_sum += energy_score(&facts);
        sugar_sum += sugar_score(&facts);
        sat_fat_sum += sat_fat_score(&facts);
        fiber_sum += fiber_score(&facts);
    }

    let n = recipe.ingredients.len() as f64;
    let energy = energy_sum / n;
    let sugar = sugar_sum / n;
    let saturated_fat = sat_fat_sum / n;
    let fiber = fiber_sum / n;

    let total = (energy * WEIGHT_ENERGY
        + sugar * WEIGHT_SUGAR
        + saturated_fat * WEIGHT_SAT_FAT
        + fiber * WEIGHT_FIBER)
        .clamp(0.0, 100.0);

    Ok(HealthinessScore {
        total,
        energy,
        sugar,
        saturated_fat,
        fiber,
    })
}

/// 100 at <= 50 kcal/100g, 0 at >= 500, linear between.
fn energy_score(facts: &NutritionFacts) -> f64 {
    ramp_down(facts.kcal, 50.0, 500.0)
}

/// 100 at 0 g sugar/100g, 0 at >= 40.
fn sugar_score(facts: &NutritionFacts) -> f64 {
    ramp_down(facts.sugar_g, 0.0, 40.0)
}

/// 100 at 0 g saturated fat/100g, 0 at >= 20.
fn sat_fat_score(facts: &NutritionFacts) -> f64 {
    ramp_down(facts.saturated_fat_g, 0.0, 20.0)
}

/// 0 at 0 g fiber/100g, 100 at >= 10.
fn fiber_score(facts: &NutritionFacts) -> f64 {
    ramp_up(facts.fiber_g, 0.0, 10.0)
}

/// 100 at or below `lo`, 0 at or above `hi`, linear in between.
fn ramp_down(value: f64, lo: f64, hi: f64) -> f64 {
    if value <= lo {
        100.0
    } else if value >= hi {
        0.0
    } else {
        100.0 * (hi - value) / (hi - lo)
    }
}

/// 0 at or below `lo`, 100 at or above `hi`, linear in between.
fn ramp_up(value: f64, lo: f64, hi: f64) -> f64 {
    100.0 - ramp_down(value, lo, hi)
}
