//! # Unit Table
//!
//! Static mapping from recognized cocktail measurement units to their
//! milliliter equivalents, plus the text-number vocabulary used by the
//! ingredient line parser ("half" -> 0.5, "two" -> 2.0, etc.).
//!
//! All tables are immutable module-level data, initialized once and never
//! mutated. Barware measures (dash, barspoon, splash, ...) use the commonly
//! cited bar-convention volumes rather than any regulatory standard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliliters per US fluid ounce.
pub const ML_PER_OZ: f64 = 29.5735;

/// Canonical measurement units recognized in ingredient lines.
///
/// This is a closed enumeration: every unit synonym the parser accepts
/// normalizes to one of these variants. `Unknown` covers recognized but
/// unquantifiable tokens ("top", "fill"), which aggregate as if ounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// US fluid ounces
    Oz,
    /// Milliliters
    Ml,
    /// Dashes (bitters-bottle shake, ~0.92 ml)
    Dash,
    /// Teaspoons
    Tsp,
    /// Tablespoons
    Tbsp,
    /// Barspoons (~5 ml)
    Barspoon,
    /// Drops (dasher-bottle drop, ~0.05 ml)
    Drop,
    /// Splashes (~0.2 oz)
    Splash,
    /// Rinses (coat-and-discard, ~0.2 oz retained)
    Rinse,
    /// Floats (layered on top, ~0.5 oz)
    Float,
    /// Recognized but unquantifiable measures ("top", "fill")
    Unknown,
}

impl Unit {
    /// Milliliters in one of this unit.
    pub fn ml_equivalent(&self) -> f64 {
        match self {
            Unit::Oz => ML_PER_OZ,
            Unit::Ml => 1.0,
            Unit::Dash => 0.92,
            Unit::Tsp => 4.92892,
            Unit::Tbsp => 14.7868,
            Unit::Barspoon => 5.0,
            Unit::Drop => 0.05,
            Unit::Splash => 5.91,
            Unit::Rinse => 5.91,
            Unit::Float => 14.79,
            // Unquantifiable tokens aggregate as ounces, matching the
            // default-unit policy for lines with no unit at all.
            Unit::Unknown => ML_PER_OZ,
        }
    }

    /// Whether this unit is a flavor accent rather than bulk liquid.
    ///
    /// Small measures are never offered for volume reduction: a recipe
    /// calling for two dashes of bitters cannot meaningfully lose a dash.
    pub fn is_small_measure(&self) -> bool {
        matches!(
            self,
            Unit::Dash | Unit::Drop | Unit::Barspoon | Unit::Rinse | Unit::Splash | Unit::Float
        )
    }

    /// Canonical token for this unit, as used when rewriting lines.
    pub fn token(&self) -> &'static str {
        match self {
            Unit::Oz => "oz",
            Unit::Ml => "ml",
            Unit::Dash => "dash",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Barspoon => "barspoon",
            Unit::Drop => "drop",
            Unit::Splash => "splash",
            Unit::Rinse => "rinse",
            Unit::Float => "float",
            Unit::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Result of looking a unit token up in the synonym table.
///
/// `cl` is the one synonym that carries a scale: it normalizes to
/// milliliters with the amount multiplied by 10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLookup {
    /// Canonical unit the token normalizes to
    pub unit: Unit,
    /// Factor applied to the parsed amount (1.0 for every token but `cl`)
    pub amount_scale: f64,
}

/// Normalize a unit token to its canonical unit, if recognized.
///
/// Matching is case-insensitive. `part`/`parts` collapse to ounces:
/// ratio-style recipes are treated as ounce recipes for aggregation,
/// a deliberate simplification rather than a physical claim.
///
/// # Examples
///
/// ```rust
/// use jigger::units::{lookup_unit, Unit};
///
/// assert_eq!(lookup_unit("ounces").unwrap().unit, Unit::Oz);
/// assert_eq!(lookup_unit("Dashes").unwrap().unit, Unit::Dash);
/// assert_eq!(lookup_unit("parts").unwrap().unit, Unit::Oz);
/// assert!(lookup_unit("bottles").is_none());
/// ```
pub fn lookup_unit(token: &str) -> Option<UnitLookup> {
    let token = token.trim().trim_end_matches('.').to_lowercase();
    let unit = match token.as_str() {
        "oz" | "ounce" | "ounces" => Unit::Oz,
        "ml" => Unit::Ml,
        "cl" => {
            return Some(UnitLookup {
                unit: Unit::Ml,
                amount_scale: 10.0,
            })
        }
        "dash" | "dashes" => Unit::Dash,
        "tsp" | "teaspoon" | "teaspoons" => Unit::Tsp,
        "tbsp" | "tablespoon" | "tablespoons" => Unit::Tbsp,
        "barspoon" | "barspoons" | "bsp" => Unit::Barspoon,
        "drop" | "drops" => Unit::Drop,
        "splash" | "splashes" => Unit::Splash,
        "rinse" => Unit::Rinse,
        "float" => Unit::Float,
        "top" | "fill" => Unit::Unknown,
        "part" | "parts" => Unit::Oz,
        _ => return None,
    };
    Some(UnitLookup {
        unit,
        amount_scale: 1.0,
    })
}

/// Resolve a textual number word to its numeric value, if recognized.
///
/// # Examples
///
/// ```rust
/// use jigger::units::lookup_text_number;
///
/// assert_eq!(lookup_text_number("half"), Some(0.5));
/// assert_eq!(lookup_text_number("Two"), Some(2.0));
/// assert_eq!(lookup_text_number("dozen"), None);
/// ```
pub fn lookup_text_number(word: &str) -> Option<f64> {
    match word.trim().to_lowercase().as_str() {
        "half" => Some(0.5),
        "quarter" => Some(0.25),
        "third" => Some(1.0 / 3.0),
        "one" => Some(1.0),
        "two" => Some(2.0),
        "three" => Some(3.0),
        "four" => Some(4.0),
        "five" => Some(5.0),
        "six" => Some(6.0),
        _ => None,
    }
}
