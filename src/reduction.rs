//! # Reducibility Classification and Reduction Application
//!
//! Flags which ingredient lines can safely lose volume when a recipe runs
//! over its target, and rewrites line quantities once the caller has chosen
//! per-line reductions.
//!
//! Garnishes, rinses and other flavor accents are never reducible. A
//! reducible ingredient never drops below a quarter ounce or below 25% of
//! its original amount, whichever floor is larger.
//!
//! ## Usage
//!
//! ```rust
//! use jigger::reduction::classify_reducible_ingredients;
//!
//! let ingredients = vec![
//!     "2 oz gin".to_string(),
//!     "1 dash bitters".to_string(),
//!     "1 lemon twist (garnish)".to_string(),
//! ];
//! let classified = classify_reducible_ingredients(&ingredients);
//!
//! assert!(classified[0].is_reducible);
//! assert!(!classified[1].is_reducible); // small measure
//! assert!(!classified[2].is_reducible); // garnish pattern
//! ```

use crate::line_parser::{ingredient_label, parse_ingredient_line};
use crate::volume::round2;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hard floor for any reduced quantity, in ounces.
pub const MIN_REDUCIBLE_OZ: f64 = 0.25;

/// Fraction of the original amount that must survive a reduction.
pub const MIN_REDUCIBLE_FRACTION: f64 = 0.25;

/// Per-line reducibility classification.
///
/// Computed fresh from the current ingredient list on every call and never
/// mutated in place; applying a reduction produces a new ingredient list
/// which must be reclassified before further reductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducibleIngredient {
    /// Position in the original ingredient list; stable identity used by
    /// callers to target reductions
    pub index: usize,
    /// Ingredient line with its quantity/unit prefix stripped, for display
    pub label: String,
    /// Current volume in ounces (0 when unparseable), 2 decimals
    pub current_amount_oz: f64,
    /// Smallest volume this line may be reduced to, 2 decimals;
    /// always <= `current_amount_oz`
    pub min_amount_oz: f64,
    /// Whether this line is bulk liquid that may safely lose volume
    pub is_reducible: bool,
}

lazy_static! {
    /// Garnish and non-liquid line patterns. Any match forces a line
    /// non-reducible regardless of its parsed quantity.
    static ref GARNISH_RE: Regex = Regex::new(
        r"(?i)\b(garnish(?:es)?|twists?|wheels?|wedges?|slices?|cherr(?:y|ies)|olives?|onions?|lea(?:f|ves)|sprigs?|peels?|zest|rims?|salt|expressed)\b"
    )
    .expect("garnish pattern is valid");
}

/// Classify every line of an ingredient list for reducibility.
///
/// Unparseable lines come back with zero amounts; garnish-pattern lines
/// and small measures (dashes, drops, barspoons, rinses, splashes, floats,
/// or anything under a quarter ounce) keep their current amount but are
/// marked non-reducible. Everything else is reducible down to
/// `max(0.25, amount * 0.25)` ounces.
pub fn classify_reducible_ingredients(ingredients: &[String]) -> Vec<ReducibleIngredient> {
    ingredients
        .iter()
        .enumerate()
        .map(|(index, line)| classify_line(index, line))
        .collect()
}

fn classify_line(index: usize, line: &str) -> ReducibleIngredient {
    let label = ingredient_label(line);

    let parsed = match parse_ingredient_line(line) {
        Some(parsed) => parsed,
        None => {
            debug!("line {index} unparseable, not reducible: '{line}'");
            return ReducibleIngredient {
                index,
                label,
                current_amount_oz: 0.0,
                min_amount_oz: 0.0,
                is_reducible: false,
            };
        }
    };

    let current_oz = parsed.oz();

    if GARNISH_RE.is_match(line) {
        debug!("line {index} matches garnish pattern, not reducible: '{line}'");
        return ReducibleIngredient {
            index,
            label,
            current_amount_oz: round2(current_oz),
            min_amount_oz: round2(current_oz),
            is_reducible: false,
        };
    }

    if parsed.unit.is_small_measure() || current_oz < MIN_REDUCIBLE_OZ {
        debug!("line {index} is a flavor accent, not reducible: '{line}'");
        return ReducibleIngredient {
            index,
            label,
            current_amount_oz: round2(current_oz),
            min_amount_oz: round2(current_oz),
            is_reducible: false,
        };
    }

    let min_oz = (current_oz * MIN_REDUCIBLE_FRACTION).max(MIN_REDUCIBLE_OZ);

    ReducibleIngredient {
        index,
        label,
        current_amount_oz: round2(current_oz),
        min_amount_oz: round2(min_oz),
        is_reducible: true,
    }
}

/// Quantize to the nearest quarter ounce.
fn round_quarter(oz: f64) -> f64 {
    (oz * 4.0).round() / 4.0
}

/// Render an amount the way a recipe card writes it: integers without a
/// decimal point, fractions as .25/.5/.75 decimals.
fn format_amount(oz: f64) -> String {
    // `{}` on f64 already drops trailing zeros: 1.5 -> "1.5", 2.0 -> "2"
    format!("{oz}")
}

/// Apply requested per-line reductions, producing a new ingredient list.
///
/// `reductions` maps line index to the requested decrease in ounces. Each
/// targeted, parseable line is decreased, clamped to at least a quarter
/// ounce, rounded to the nearest quarter ounce, and re-rendered as
/// `"<amount> oz <label>"` (the unit normalizes to ounces on rewrite).
/// Untargeted or unparseable lines pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use jigger::reduction::apply_reductions;
/// use std::collections::HashMap;
///
/// let ingredients = vec!["2 oz gin".to_string(), "1 oz vermouth".to_string()];
/// let reductions = HashMap::from([(0, 0.5)]);
///
/// let rebalanced = apply_reductions(&ingredients, &reductions);
/// assert_eq!(rebalanced[0], "1.5 oz gin");
/// assert_eq!(rebalanced[1], "1 oz vermouth");
/// ```
pub fn apply_reductions(
    ingredients: &[String],
    reductions: &HashMap<usize, f64>,
) -> Vec<String> {
    ingredients
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let requested = match reductions.get(&index) {
                Some(requested) => *requested,
                None => return line.clone(),
            };
            let parsed = match parse_ingredient_line(line) {
                Some(parsed) => parsed,
                None => return line.clone(),
            };

            let current_oz = parsed.oz();
            let reduced = round_quarter((current_oz - requested).max(MIN_REDUCIBLE_OZ));
            let label = ingredient_label(line);

            debug!("line {index}: {current_oz:.2} oz - {requested:.2} oz -> {reduced} oz");
            format!("{} oz {}", format_amount(reduced), label)
        })
        .collect()
}
