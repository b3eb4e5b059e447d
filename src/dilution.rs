//! # Dilution and ABV Model
//!
//! Combines the parsed base volume of a recipe, the dilution percentage of
//! its preparation method and the per-ingredient ABV table into the derived
//! physics of the finished drink: water added, final volume, and alcohol
//! by volume before and after dilution.
//!
//! All arithmetic runs at full precision; rounding (volumes to 2 decimals,
//! ABV to 1 decimal, dilution factor to 2 decimals) happens only on the
//! returned structures.
//!
//! ## Usage
//!
//! ```rust
//! use jigger::dilution::calculate_complete_drink_metrics;
//!
//! let ingredients = vec!["2 oz vodka".to_string(), "0.5 oz vermouth".to_string()];
//! let metrics = calculate_complete_drink_metrics(
//!     &ingredients,
//!     "Stir and strain into a chilled glass",
//!     None,
//! );
//!
//! assert_eq!(metrics.base_volume_oz, 2.5);
//! assert_eq!(metrics.final_volume_oz, 3.05);
//! assert!(metrics.final_abv < metrics.base_abv);
//! ```

use crate::abv_table::abv_for_ingredient;
use crate::line_parser::parse_ingredient_line;
use crate::preparation::{detect_preparation_method, PreparationMethod};
use crate::volume::{round2, total_volume_oz_raw};
use log::debug;
use serde::{Deserialize, Serialize};

/// Volume-side view of a diluted drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilutionInfo {
    /// Resolved preparation method
    pub method: PreparationMethod,
    /// Fraction of base volume added as meltwater
    pub dilution_percent: f64,
    /// Pre-dilution volume, oz (2 decimals)
    pub base_volume_oz: f64,
    /// Meltwater volume, oz (2 decimals)
    pub water_added_oz: f64,
    /// Finished-drink volume, oz (2 decimals)
    pub final_volume_oz: f64,
    /// base / final, <= 1 (2 decimals; 1.0 for an empty recipe)
    pub dilution_factor: f64,
}

/// Full physical model of a finished drink: dilution plus ABV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteDrinkMetrics {
    /// Resolved preparation method
    pub method: PreparationMethod,
    /// Fraction of base volume added as meltwater
    pub dilution_percent: f64,
    /// Pre-dilution volume, oz (2 decimals)
    pub base_volume_oz: f64,
    /// Meltwater volume, oz (2 decimals)
    pub water_added_oz: f64,
    /// Finished-drink volume, oz (2 decimals)
    pub final_volume_oz: f64,
    /// base / final, <= 1 (2 decimals)
    pub dilution_factor: f64,
    /// Ounces of pure alcohol in the recipe (2 decimals)
    pub alcohol_oz: f64,
    /// Percent ABV before dilution (1 decimal)
    pub base_abv: f64,
    /// Percent ABV after dilution (1 decimal); <= `base_abv`
    pub final_abv: f64,
}

/// Round to 1 decimal, the boundary precision for ABV figures.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Resolve the method and compute raw (unrounded) volume figures shared by
/// both public entry points.
fn dilution_raw(
    ingredients: &[String],
    instructions: &str,
    method_override: Option<PreparationMethod>,
) -> (PreparationMethod, f64, f64, f64, f64) {
    let method = method_override.unwrap_or_else(|| detect_preparation_method(instructions));
    let percent = method.dilution_percent();

    let base = total_volume_oz_raw(ingredients);
    let water = base * percent;
    let final_volume = base + water;

    debug!("dilution: method={method} base={base:.3} water={water:.3} final={final_volume:.3}");

    (method, percent, base, water, final_volume)
}

/// Model the dilution of a recipe.
///
/// An explicit `method_override` wins over instruction-text detection.
/// Water added is `base_volume * dilution_percent`; an empty or fully
/// unparseable ingredient list yields zero volumes and a dilution factor
/// of 1.0.
pub fn dilution_info(
    ingredients: &[String],
    instructions: &str,
    method_override: Option<PreparationMethod>,
) -> DilutionInfo {
    let (method, percent, base, water, final_volume) =
        dilution_raw(ingredients, instructions, method_override);

    let factor = if final_volume > 0.0 {
        base / final_volume
    } else {
        1.0
    };

    DilutionInfo {
        method,
        dilution_percent: percent,
        base_volume_oz: round2(base),
        water_added_oz: round2(water),
        final_volume_oz: round2(final_volume),
        dilution_factor: round2(factor),
    }
}

/// Ounces of pure alcohol contributed by one ingredient line.
///
/// Unparseable lines contribute zero, as they do for volume.
pub fn alcohol_contribution_oz(line: &str) -> f64 {
    match parse_ingredient_line(line) {
        Some(parsed) => parsed.oz() * abv_for_ingredient(line) / 100.0,
        None => 0.0,
    }
}

/// Compute the full metrics of a finished drink.
///
/// Per-line alcohol contributions are summed at full precision;
/// `base_abv` and `final_abv` divide that sum by the raw base and final
/// volumes. Both ABV figures are defined as 0.0 when the base volume is
/// zero rather than raising a division error.
pub fn calculate_complete_drink_metrics(
    ingredients: &[String],
    instructions: &str,
    method_override: Option<PreparationMethod>,
) -> CompleteDrinkMetrics {
    let (method, percent, base, water, final_volume) =
        dilution_raw(ingredients, instructions, method_override);

    let alcohol_oz: f64 = ingredients
        .iter()
        .map(|line| alcohol_contribution_oz(line))
        .sum();

    let (base_abv, final_abv) = if base > 0.0 {
        (
            100.0 * alcohol_oz / base,
            100.0 * alcohol_oz / final_volume,
        )
    } else {
        (0.0, 0.0)
    };

    let factor = if final_volume > 0.0 {
        base / final_volume
    } else {
        1.0
    };

    CompleteDrinkMetrics {
        method,
        dilution_percent: percent,
        base_volume_oz: round2(base),
        water_added_oz: round2(water),
        final_volume_oz: round2(final_volume),
        dilution_factor: round2(factor),
        alcohol_oz: round2(alcohol_oz),
        base_abv: round1(base_abv),
        final_abv: round1(final_abv),
    }
}
