//! The selection session: orchestrates filter, match, score, rank, and
//! the interactive choice.
//!
//! A session borrows a read-only catalog and moves through a small
//! state machine: Collecting (gathering pantry and restrictions) →
//! Presenting (ranked candidates available, waiting for a choice) →
//! Selected, or Empty when filtering yields no candidates. An invalid
//! choice is recoverable and leaves the session Presenting.

use tracing::{debug, warn};

use crate::catalog::RecipeCatalog;
use crate::error::{ScoreError, SelectError};
use crate::matcher::{self, CoverageReport, Pantry};
use crate::nutrition::NutritionLookup;
use crate::restrictions::{self, DietaryRestriction};
use crate::score::{self, HealthinessScore};
use crate::types::Recipe;

/// A recipe that passed dietary filtering and the coverage threshold,
/// with the artifacts of filtering. Scores are computed once per
/// session here; the catalog recipe itself never changes.
#[derive(Debug)]
pub struct Candidate<'a> {
    pub recipe: &'a Recipe,
    pub coverage: CoverageReport,
    pub score: HealthinessScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    Presenting,
    Selected,
    Empty,
}

pub struct SelectionSession<'a> {
    catalog: &'a RecipeCatalog,
    pantry: Pantry,
    restrictions: Vec<&'static DietaryRestriction>,
    threshold: f64,
    candidates: Vec<Candidate<'a>>,
    dropped: Vec<(String, ScoreError)>,
    state: SessionState,
}

impl<'a> SelectionSession<'a> {
    pub fn new(catalog: &'a RecipeCatalog) -> Self {
        Self {
            catalog,
            pantry: Pantry::new(),
            restrictions: Vec::new(),
            threshold: 1.0,
            candidates: Vec::new(),
            dropped: Vec::new(),
            state: SessionState::Collecting,
        }
    }

    /// Minimum coverage fraction a recipe needs to qualify. 1.0 (the
    /// default) means no missing ingredients allowed. Clamped to [0, 1].
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn add_ingredient(&mut self, raw: &str) {
        self.pantry.add(raw);
    }

    pub fn add_ingredients<I, S>(&mut self, raws: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pantry.extend(raws);
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// Activate a restriction by name. An unrecognized name is reported
    /// immediately; the session does not proceed with a partial set.
    pub fn add_restriction(&mut self, name: &str) -> Result<(), SelectError> {
        let resolved = restrictions::resolve(&[name])?;
        let restriction = resolved[0];
        if !self.restrictions.iter().any(|r| r.name == restriction.name) {
            self.restrictions.push(restriction);
        }
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the pipeline: dietary filter, coverage filter, score, rank.
    ///
    /// Recipes whose ingredients lack nutrition data are dropped from
    /// the candidate list (and recorded on the session), not fatal.
    /// Zero candidates is `NoMatchingRecipe` and leaves the session in
    /// the Empty state — a normal outcome, not a crash.
    pub fn run(&mut self, nutrition: &dyn NutritionLookup) -> Result<&[Candidate<'a>], SelectError> {
        if self.pantry.is_empty() {
            return Err(SelectError::EmptyPantry);
        }

        self.candidates.clear();
        self.dropped.clear();

        for recipe in self.catalog.recipes() {
            if !restrictions::satisfies_all(recipe, &self.restrictions) {
                debug!(recipe = %recipe.name, "excluded by dietary filter");
                continue;
            }

            let coverage = matcher::match_recipe(&self.pantry, recipe);
            if coverage.fraction() < self.threshold {
                debug!(
                    recipe = %recipe.name,
                    coverage = coverage.fraction(),
                    "below coverage threshold"
                );
                continue;
            }

            match score::score_recipe(recipe, nutrition) {
                Ok(score) => self.candidates.push(Candidate {
                    recipe,
                    coverage,
                    score,
                }),
                Err(err) => {
                    warn!(recipe = %recipe.name, %err, "dropping recipe");
                    self.dropped.push((recipe.name.clone(), err));
                }
            }
        }

        // Total order: score desc, then coverage desc, then name asc.
        self.candidates.sort_by(|a, b| {
            b.score
                .total
                .total_cmp(&a.score.total)
                .then_with(|| b.coverage.fraction().total_cmp(&a.coverage.fraction()))
                .then_with(|| a.recipe.name.cmp(&b.recipe.name))
        });

        if self.candidates.is_empty() {
            self.state = SessionState::Empty;
            return Err(SelectError::NoMatchingRecipe);
        }

        self.state = SessionState::Presenting;
        Ok(&self.candidates)
    }

    /// Ranked candidates. Empty until `run` succeeds.
    pub fn candidates(&self) -> &[Candidate<'a>] {
        &self.candidates
    }

    /// `(name, score)` pairs in rank order, the shape the display
    /// collaborator charts.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        self.candidates
            .iter()
            .map(|c| (c.recipe.name.as_str(), c.score.total))
            .collect()
    }

    /// Recipes dropped during filtering for missing nutrition data.
    pub fn dropped(&self) -> &[(String, ScoreError)] {
        &self.dropped
    }

    /// Commit to the candidate at `index` and return the full recipe.
    ///
    /// Out of range is recoverable: the session stays Presenting so the
    /// caller can re-prompt.
    pub fn choose(&mut self, index: usize) -> Result<&'a Recipe, SelectError> {
        if self.state != SessionState::Presenting {
            return Err(SelectError::NotPresenting);
        }
        let candidate = self
            .candidates
            .get(index)
            .ok_or(SelectError::InvalidSelection {
                index,
                count: self.candidates.len(),
            })?;
        self.state = SessionState::Selected;
        Ok(candidate.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeRecord;
    use crate::nutrition::EmbeddedNutrition;

    fn record(name: &str, ingredients: &[&str], tags: &[&str]) -> RecipeRecord {
        RecipeRecord {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            steps: vec![],
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn stew_catalog() -> RecipeCatalog {
        RecipeCatalog::from_records(vec![
            record(
                "Veggie Stew",
                &["2 carrots", "2 potatoes", "1 onion"],
                &["vegetarian"],
            ),
            record("Beef Stew", &["1 lb beef", "2 potatoes", "1 onion"], &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_vegetarian_scenario() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        session.add_ingredients(["carrot", "potato", "onion"]);
        session.add_restriction("vegetarian").unwrap();

        let candidates = session.run(&EmbeddedNutrition).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].recipe.name, "Veggie Stew");
        assert_eq!(candidates[0].coverage.fraction(), 1.0);
        assert_eq!(session.state(), SessionState::Presenting);
    }

    #[test]
    fn test_no_matching_recipe() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        session.add_ingredient("potato");

        let err = session.run(&EmbeddedNutrition).unwrap_err();
        assert!(matches!(err, SelectError::NoMatchingRecipe));
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_threshold_relaxation() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        session.add_ingredient("potato");
        session.set_threshold(0.3);

        let candidates = session.run(&EmbeddedNutrition).unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_empty_pantry() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        let err = session.run(&EmbeddedNutrition).unwrap_err();
        assert!(matches!(err, SelectError::EmptyPantry));
        assert_eq!(session.state(), SessionState::Collecting);
    }

    #[test]
    fn test_unknown_restriction() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        let err = session.add_restriction("pescatarian").unwrap_err();
        assert!(matches!(err, SelectError::UnknownRestriction(_)));
    }

    #[test]
    fn test_invalid_selection_is_recoverable() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        session.add_ingredients(["carrot", "potato", "onion", "beef"]);
        session.set_threshold(1.0);
        session.run(&EmbeddedNutrition).unwrap();
        assert_eq!(session.candidates().len(), 2);

        let err = session.choose(7).unwrap_err();
        assert!(matches!(
            err,
            SelectError::InvalidSelection { index: 7, count: 2 }
        ));
        assert_eq!(session.state(), SessionState::Presenting);

        // A valid choice still works afterwards
        let recipe = session.choose(0).unwrap();
        assert!(!recipe.name.is_empty());
        assert_eq!(session.state(), SessionState::Selected);
    }

    #[test]
    fn test_choose_before_presenting() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        assert!(matches!(
            session.choose(0),
            Err(SelectError::NotPresenting)
        ));
    }

    #[test]
    fn test_ordering_is_total_and_stable() {
        let catalog = stew_catalog();
        let run_once = || {
            let mut session = SelectionSession::new(&catalog);
            session.add_ingredients(["carrot", "potato", "onion", "beef"]);
            session.run(&EmbeddedNutrition).unwrap();
            session
                .ranked()
                .iter()
                .map(|(n, s)| (n.to_string(), *s))
                .collect::<Vec<_>>()
        };
        let first = run_once();
        let second = run_once();
        assert_eq!(first, second);
        // Veggie Stew scores higher than Beef Stew
        assert_eq!(first[0].0, "Veggie Stew");
        assert!(first[0].1 > first[1].1);
    }

    #[test]
    fn test_missing_nutrition_drops_recipe() {
        let catalog = RecipeCatalog::from_records(vec![
            record("Plain Mash", &["4 potatoes"], &[]),
            record("Weird Mash", &["4 potatoes", "1 cup powdered moonstone"], &[]),
        ])
        .unwrap();
        let mut session = SelectionSession::new(&catalog);
        session.add_ingredients(["potatoes", "powdered moonstone"]);

        let candidates = session.run(&EmbeddedNutrition).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].recipe.name, "Plain Mash");
        assert_eq!(session.dropped().len(), 1);
        assert_eq!(session.dropped()[0].0, "Weird Mash");
    }

    #[test]
    fn test_restriction_deduplicated() {
        let catalog = stew_catalog();
        let mut session = SelectionSession::new(&catalog);
        session.add_restriction("vegetarian").unwrap();
        session.add_restriction("Vegetarian").unwrap();
        assert_eq!(session.restrictions.len(), 1);
    }
}
