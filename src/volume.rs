//! # Volume Aggregator
//!
//! Sums parsed ingredient-line volumes into a total in US fluid ounces and
//! compares a modified recipe's total against a target volume.
//!
//! Lines that fail to parse contribute zero volume and are silently
//! excluded; recipes are messy free text and a missing quantity is not an
//! error condition.
//!
//! ## Usage
//!
//! ```rust
//! use jigger::volume::total_volume_oz;
//!
//! let ingredients = vec![
//!     "2 oz bourbon".to_string(),
//!     "0.75 oz lemon juice".to_string(),
//!     "0.5 oz simple syrup".to_string(),
//! ];
//! assert_eq!(total_volume_oz(&ingredients), 3.25);
//! ```

use crate::line_parser::parse_ingredient_line;
use crate::units::ML_PER_OZ;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Overage below this many ounces is within pour tolerance and needs no
/// rebalancing.
pub const BALANCE_TOLERANCE_OZ: f64 = 0.25;

/// Comparison between a baseline recipe volume, a modified recipe volume,
/// and a target volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeOverageResult {
    /// Total volume of the original ingredient list, oz (2 decimals)
    pub original_volume_oz: f64,
    /// Total volume of the modified ingredient list, oz (2 decimals)
    pub new_volume_oz: f64,
    /// Resolved target volume, oz (2 decimals)
    pub target_volume_oz: f64,
    /// How far the modified recipe exceeds the target, oz (2 decimals,
    /// negative when under target)
    pub overage_oz: f64,
    /// Whether the overage is at or above the quarter-ounce tolerance
    pub requires_balance: bool,
}

/// Round to 2 decimal places, the precision used at public boundaries.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total volume of an ingredient list in ounces, at full precision.
///
/// Internal variant used wherever the total feeds further arithmetic;
/// rounding only happens at the public boundary.
pub(crate) fn total_volume_oz_raw(ingredients: &[String]) -> f64 {
    let total_ml: f64 = ingredients
        .iter()
        .filter_map(|line| parse_ingredient_line(line))
        .map(|parsed| parsed.ml())
        .sum();
    total_ml / ML_PER_OZ
}

/// Total volume of an ingredient list in US fluid ounces.
///
/// Each line is parsed, converted to milliliters via the unit table, summed
/// and converted back to ounces. Unparseable lines contribute zero. The
/// result is rounded to 2 decimals.
pub fn total_volume_oz(ingredients: &[String]) -> f64 {
    round2(total_volume_oz_raw(ingredients))
}

lazy_static! {
    /// Matches a target-volume string: "6 oz", "180ml"
    static ref TARGET_VOLUME_RE: Regex =
        Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(oz|ml)\s*$").expect("target pattern is valid");
}

/// Resolve a target-volume string such as `"6 oz"` or `"180 ml"` into
/// ounces. Unrecognized formats yield `None`; callers fall back to the
/// original recipe volume.
pub fn parse_target_volume(text: &str) -> Option<f64> {
    let caps = TARGET_VOLUME_RE.captures(text)?;
    let amount: f64 = caps[1].parse().ok()?;
    match caps[2].to_lowercase().as_str() {
        "oz" => Some(amount),
        "ml" => Some(amount / ML_PER_OZ),
        _ => None,
    }
}

/// Compare a modified recipe's total volume against a target.
///
/// When `target_volume` is absent or unparseable the original recipe's
/// total stands in as the target. The overage is computed from the
/// unrounded new/target totals and only then rounded; the three reported
/// volumes are each rounded independently.
///
/// # Examples
///
/// ```rust
/// use jigger::volume::calculate_volume_overage;
///
/// let original = vec!["2 oz rye".to_string(), "0.5 oz syrup".to_string()];
/// let modified = vec![
///     "2 oz rye".to_string(),
///     "0.5 oz syrup".to_string(),
///     "0.5 oz amaro".to_string(),
/// ];
///
/// let result = calculate_volume_overage(&original, &modified, Some("2.5 oz"));
/// assert_eq!(result.overage_oz, 0.5);
/// assert!(result.requires_balance);
/// ```
pub fn calculate_volume_overage(
    original: &[String],
    modified: &[String],
    target_volume: Option<&str>,
) -> VolumeOverageResult {
    let original_raw = total_volume_oz_raw(original);
    let new_raw = total_volume_oz_raw(modified);

    let target_raw = target_volume
        .and_then(parse_target_volume)
        .unwrap_or(original_raw);

    let overage_oz = round2(new_raw - target_raw);
    let requires_balance = overage_oz >= BALANCE_TOLERANCE_OZ;

    debug!(
        "volume overage: original={original_raw:.3} new={new_raw:.3} target={target_raw:.3} overage={overage_oz}"
    );

    VolumeOverageResult {
        original_volume_oz: round2(original_raw),
        new_volume_oz: round2(new_raw),
        target_volume_oz: round2(target_raw),
        overage_oz,
        requires_balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_total_volume_simple() {
        let ingredients = lines(&["2 oz bourbon", "0.75 oz lemon juice", "0.5 oz simple syrup"]);
        assert_eq!(total_volume_oz(&ingredients), 3.25);
    }

    #[test]
    fn test_total_volume_mixed_units() {
        let ingredients = lines(&["30 ml vodka", "1 oz lime juice"]);
        let expected = round2(30.0 / ML_PER_OZ + 1.0);
        assert_eq!(total_volume_oz(&ingredients), expected);
    }

    #[test]
    fn test_total_volume_skips_unparseable() {
        let ingredients = lines(&["2 oz gin", "lemon twist for garnish", "expressed orange peel"]);
        assert_eq!(total_volume_oz(&ingredients), 2.0);
    }

    #[test]
    fn test_total_volume_empty_list() {
        assert_eq!(total_volume_oz(&[]), 0.0);
        assert_eq!(total_volume_oz(&lines(&["no quantities here"])), 0.0);
    }

    #[test]
    fn test_parse_target_volume() {
        assert_eq!(parse_target_volume("6 oz"), Some(6.0));
        assert_eq!(parse_target_volume("2.5oz"), Some(2.5));
        assert_eq!(parse_target_volume("6 OZ"), Some(6.0));
        assert!((parse_target_volume("180 ml").unwrap() - 180.0 / ML_PER_OZ).abs() < 1e-9);

        assert_eq!(parse_target_volume("six ounces"), None);
        assert_eq!(parse_target_volume("6 cups"), None);
        assert_eq!(parse_target_volume(""), None);
    }

    #[test]
    fn test_overage_with_explicit_target() {
        let original = lines(&["2 oz rye", "0.5 oz syrup"]);
        let modified = lines(&["2 oz rye", "0.5 oz syrup", "0.5 oz amaro"]);

        let result = calculate_volume_overage(&original, &modified, Some("2.5 oz"));

        assert_eq!(result.original_volume_oz, 2.5);
        assert_eq!(result.new_volume_oz, 3.0);
        assert_eq!(result.target_volume_oz, 2.5);
        assert_eq!(result.overage_oz, 0.5);
        assert!(result.requires_balance);
    }

    #[test]
    fn test_overage_defaults_to_original_total() {
        let original = lines(&["2 oz gin", "1 oz vermouth"]);
        let modified = lines(&["2 oz gin", "1 oz vermouth", "0.25 oz brine"]);

        let result = calculate_volume_overage(&original, &modified, None);

        assert_eq!(result.target_volume_oz, 3.0);
        assert_eq!(result.overage_oz, 0.25);
        assert!(result.requires_balance);
    }

    #[test]
    fn test_overage_unparseable_target_falls_back() {
        let original = lines(&["2 oz gin"]);
        let modified = lines(&["2 oz gin", "0.1 oz syrup"]);

        let result = calculate_volume_overage(&original, &modified, Some("a coupe glass"));

        assert_eq!(result.target_volume_oz, 2.0);
        assert_eq!(result.overage_oz, 0.1);
        assert!(!result.requires_balance); // below the quarter-ounce tolerance
    }

    #[test]
    fn test_overage_under_target_is_negative() {
        let original = lines(&["2 oz gin", "1 oz vermouth"]);
        let modified = lines(&["2 oz gin"]);

        let result = calculate_volume_overage(&original, &modified, None);

        assert_eq!(result.overage_oz, -1.0);
        assert!(!result.requires_balance);
    }

    #[test]
    fn test_overage_monotonic_in_modified_volume() {
        let original = lines(&["2 oz rye"]);
        let mut previous = f64::NEG_INFINITY;
        for amount in ["2", "2.5", "3", "4"] {
            let modified = lines(&[&format!("{amount} oz rye")]);
            let result = calculate_volume_overage(&original, &modified, Some("2 oz"));
            assert!(
                result.overage_oz >= previous,
                "overage should not decrease when volume grows"
            );
            previous = result.overage_oz;
        }
    }
}
