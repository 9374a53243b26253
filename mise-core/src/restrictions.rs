//! Dietary restrictions and the filter over them.
//!
//! A restriction is a name plus a set of forbidden ingredient keywords.
//! A recipe satisfies a restriction when it carries the restriction's
//! tag, or when none of its ingredients match a forbidden keyword.
//! Built-in restrictions are loaded from `data/restrictions.json` at
//! compile time.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::SelectError;
use crate::types::{Ingredient, Recipe};

#[derive(Debug, Clone, Deserialize)]
pub struct DietaryRestriction {
    pub name: String,
    /// Forbidden ingredient keywords, lowercase. Single words match
    /// word-for-word (with plural leniency); multi-word keywords match
    /// by containment.
    pub forbidden: Vec<String>,
}

#[derive(Deserialize)]
struct RestrictionsData {
    restrictions: Vec<DietaryRestriction>,
}

static BUILTIN: LazyLock<Vec<DietaryRestriction>> = LazyLock::new(|| {
    let json = include_str!("../data/restrictions.json");
    let data: RestrictionsData =
        serde_json::from_str(json).expect("restrictions.json should be valid");
    data.restrictions
});

/// All built-in restrictions, in data-file order.
pub fn all() -> &'static [DietaryRestriction] {
    &BUILTIN
}

/// Look up a built-in restriction by name (case-insensitive).
pub fn builtin(name: &str) -> Option<&'static DietaryRestriction> {
    let lower = name.trim().to_lowercase();
    BUILTIN.iter().find(|r| r.name == lower)
}

/// Resolve restriction names against the registry. An unrecognized name
/// fails the whole resolution; selection must not proceed past it.
pub fn resolve<S: AsRef<str>>(
    names: &[S],
) -> Result<Vec<&'static DietaryRestriction>, SelectError> {
    names
        .iter()
        .map(|n| {
            builtin(n.as_ref()).ok_or_else(|| SelectError::UnknownRestriction(n.as_ref().to_string()))
        })
        .collect()
}

impl DietaryRestriction {
    /// True when the recipe satisfies this restriction: either it is
    /// tagged as such, or no ingredient matches a forbidden keyword.
    pub fn permits(&self, recipe: &Recipe) -> bool {
        recipe.has_tag(&self.name) || self.violating_ingredient(&recipe.ingredients).is_none()
    }

    /// First ingredient matching a forbidden keyword, if any. Used both
    /// by filtering and by catalog-load tag validation.
    pub fn violating_ingredient<'a>(&self, ingredients: &'a [Ingredient]) -> Option<&'a Ingredient> {
        ingredients
            .iter()
            .find(|ing| self.forbidden.iter().any(|kw| keyword_matches(&ing.name, kw)))
    }
}

/// True iff every restriction permits the recipe. Restrictions compose
/// with logical AND; an empty set passes everything.
pub fn satisfies_all(recipe: &Recipe, restrictions: &[&DietaryRestriction]) -> bool {
    restrictions.iter().all(|r| r.permits(recipe))
}

/// Match a forbidden keyword against a normalized ingredient name.
///
/// Single-word keywords compare whole words so "egg" does not hit
/// "eggplant"; plural leniency lets "egg" hit "eggs". Multi-word
/// keywords ("fish sauce") use substring containment.
fn keyword_matches(name: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        return name.contains(keyword);
    }
    name.split_whitespace().any(|word| word_eq_plural(word, keyword))
}

fn word_eq_plural(a: &str, b: &str) -> bool {
    a == b || a.strip_suffix('s') == Some(b) || b.strip_suffix('s') == Some(a)
}
