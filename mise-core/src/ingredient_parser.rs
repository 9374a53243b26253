//! Ingredient line parsing.
//!
//! Catalog records carry raw ingredient lines such as "2 cups chopped
//! carrots". Parsing extracts the amount and unit, then strips
//! preparation descriptors so the remaining item name ("carrots") can be
//! used as the ingredient's identity for matching and nutrition lookup.

use std::sync::LazyLock;

use crate::types::{Ingredient, Quantity};

/// Common cooking units (lowercase for matching).
/// Sorted by length at runtime (longest first) to avoid partial matches
/// (e.g., "tablespoons" must match before "tbsp").
static UNITS_SORTED: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut units = UNITS_RAW.to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()));
    units
});

const UNITS_RAW: &[&str] = &[
    // Volume
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "cups",
    "cup",
    "tbsp",
    "tsp",
    "milliliters",
    "milliliter",
    "liters",
    "liter",
    "ml",
    "l",
    // Weight
    "kilograms",
    "kilogram",
    "grams",
    "gram",
    "kg",
    "g",
    "ounces",
    "ounce",
    "oz",
    "pounds",
    "pound",
    "lbs",
    "lb",
    // Count/size
    "packages",
    "package",
    "handfuls",
    "handful",
    "pinches",
    "pinch",
    "slices",
    "slice",
    "cloves",
    "clove",
    "stalks",
    "stalk",
    "sprigs",
    "sprig",
    "sticks",
    "stick",
    "heads",
    "head",
    "bunches",
    "bunch",
    "dashes",
    "dash",
    "cans",
    "can",
    "jars",
    "jar",
    "bottles",
    "bottle",
];

/// Preparation descriptors stripped from item names. Matched as whole
/// words so "grated" goes but "pomegranate" stays.
const DESCRIPTORS: &[&str] = &[
    "chopped",
    "diced",
    "minced",
    "sliced",
    "grated",
    "shredded",
    "crushed",
    "peeled",
    "ground",
    "beaten",
    "melted",
    "softened",
    "divided",
    "drained",
    "rinsed",
    "trimmed",
    "halved",
    "quartered",
    "cubed",
    "finely",
    "thinly",
    "roughly",
    "coarsely",
    "fresh",
    "frozen",
    "dried",
    "cooked",
    "uncooked",
    "large",
    "small",
    "medium",
    "optional",
];

/// Trailing phrases dropped before descriptor stripping.
const TAIL_PHRASES: &[&str] = &["to taste", "as needed", "for garnish", "for serving", "or more"];

/// Parse a single raw ingredient line into a structured ingredient.
///
/// Best-effort: if nothing can be extracted, the whole cleaned line
/// becomes the item name with no quantity.
pub fn parse_line(raw: &str) -> Ingredient {
    let raw = raw.trim();

    let (amount, after_amount) = extract_amount(raw);
    let (unit, after_unit) = extract_unit(&after_amount);

    // Anything after a comma is a prep note ("butter, softened").
    let item_part = match after_unit.find(',') {
        Some(idx) => &after_unit[..idx],
        None => &after_unit,
    };

    let name = clean_item(item_part);
    let quantity = if amount.is_some() || unit.is_some() {
        Some(Quantity { amount, unit })
    } else {
        None
    };

    Ingredient {
        // Fall back to the raw line when cleaning ate everything.
        name: if name.is_empty() {
            crate::types::normalize_name(raw)
        } else {
            name
        },
        quantity,
        category: None,
        raw: Some(raw.to_string()),
    }
}

/// Parse a slice of raw lines, skipping blank ones.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Ingredient> {
    lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| !l.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Clean a name down to its bare item identity: lowercase, drop tail
/// phrases and preparation descriptors, collapse whitespace.
///
/// Also used for pantry input so user-typed names and catalog names go
/// through the same normalization.
pub fn clean_item(s: &str) -> String {
    let mut lower = crate::types::normalize_name(s);

    for phrase in TAIL_PHRASES {
        if let Some(stripped) = lower.strip_suffix(phrase) {
            lower = stripped.trim_end().trim_end_matches(',').to_string();
        }
    }

    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c == ',' || c == '.'))
        .filter(|w| !w.is_empty() && !DESCRIPTORS.contains(w))
        .collect();

    words.join(" ")
}

/// Extract an amount from the beginning of a string.
/// Handles integers, decimals, fractions, and mixed numbers ("1 1/2").
/// Returns (amount, remaining_string).
fn extract_amount(s: &str) -> (Option<String>, String) {
    let s = s.trim();
    if s.is_empty() {
        return (None, s.to_string());
    }

    let words: Vec<&str> = s.split_whitespace().collect();

    // Mixed number: whole number followed by a fraction
    if words.len() >= 2 && words[0].chars().all(|c| c.is_ascii_digit()) && is_fraction(words[1]) {
        let amount = format!("{} {}", words[0], words[1]);
        if let Some(pos) = s.find(words[1]) {
            let end = pos + words[1].len();
            return (Some(amount), s[end..].trim().to_string());
        }
    }

    // Plain fraction
    if let Some(first) = words.first() {
        if is_fraction(first) {
            return (
                Some((*first).to_string()),
                s[first.len()..].trim().to_string(),
            );
        }
    }

    // Decimal or integer
    let mut amount = String::new();
    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            amount.push(c);
        } else {
            break;
        }
    }
    if !amount.is_empty() && amount != "." {
        let rest = s[amount.len()..].trim().to_string();
        return (Some(amount), rest);
    }

    (None, s.to_string())
}

fn is_fraction(s: &str) -> bool {
    match s.split_once('/') {
        Some((num, den)) => {
            !num.is_empty()
                && !den.is_empty()
                && num.chars().all(|c| c.is_ascii_digit())
                && den.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Extract a unit from the beginning of a string.
/// Returns (unit, remaining_string).
fn extract_unit(s: &str) -> (Option<String>, String) {
    let s = s.trim();
    let lower = s.to_lowercase();

    for &unit in UNITS_SORTED.iter() {
        if lower.starts_with(unit) {
            let after = &s[unit.len()..];
            // Word boundary check so "g" doesn't eat "garlic".
            if after.is_empty() || after.starts_with(|c: char| c.is_whitespace() || c == '.') {
                let rest = after.trim_start_matches('.').trim();
                return (Some(unit.to_string()), rest.to_string());
            }
        }
    }

    (None, s.to_string())
}
