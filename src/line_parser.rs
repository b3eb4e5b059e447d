//! # Ingredient Line Parser
//!
//! This module extracts a quantity and unit from a free-text ingredient line
//! such as `"2 oz Rye Whiskey"` or `"1 1/2 oz fresh lemon juice"`.
//!
//! ## Supported quantity formats
//!
//! - Integers and decimals: `2`, `0.75`
//! - Simple fractions: `1/2`, `3/4`
//! - Mixed numbers: `1 1/2`, `2 3/4`
//! - Ranges, averaged: `1-2`, `1.5 - 2`
//! - Number words: `half`, `quarter`, `third`, `one` .. `six`
//!
//! An optional unit token may follow the quantity (see [`crate::units`] for
//! the synonym table); when absent or unrecognized the unit defaults to
//! ounces. Parsing is best effort and never fails loudly: a line with no
//! recognizable leading quantity simply yields `None`.
//!
//! ## Usage
//!
//! ```rust
//! use jigger::line_parser::parse_ingredient_line;
//! use jigger::units::Unit;
//!
//! let parsed = parse_ingredient_line("2 oz bourbon").unwrap();
//! assert_eq!(parsed.amount, 2.0);
//! assert_eq!(parsed.unit, Unit::Oz);
//! ```

use crate::units::{lookup_text_number, lookup_unit, Unit, ML_PER_OZ};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The quantity and unit parsed from one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedVolume {
    /// Resolved quantity; always > 0 (a zero resolution is reported as
    /// a parse failure, not a zero-amount structure)
    pub amount: f64,

    /// Canonical unit; `Unit::Oz` when the line carried no unit token
    pub unit: Unit,

    /// The untouched source line, kept for traceability
    pub original: String,
}

impl ParsedVolume {
    /// Volume of this line in US fluid ounces, at full precision.
    pub fn oz(&self) -> f64 {
        self.amount * self.unit.ml_equivalent() / ML_PER_OZ
    }

    /// Volume of this line in milliliters, at full precision.
    pub fn ml(&self) -> f64 {
        self.amount * self.unit.ml_equivalent()
    }
}

lazy_static! {
    /// Matches a range quantity: "1-2", "1.5 - 2"
    static ref RANGE_RE: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)").expect("range pattern is valid");

    /// Matches a mixed number: "1 1/2", "2 3/4"
    static ref MIXED_RE: Regex =
        Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)").expect("mixed-number pattern is valid");

    /// Matches a simple fraction: "1/2", "3/4"
    static ref FRACTION_RE: Regex =
        Regex::new(r"^(\d+)\s*/\s*(\d+)").expect("fraction pattern is valid");

    /// Matches an integer or decimal: "2", "0.75"
    static ref DECIMAL_RE: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)").expect("decimal pattern is valid");

    /// Matches a textual number word at the start of the line
    static ref TEXT_NUMBER_RE: Regex =
        Regex::new(r"(?i)^(half|quarter|third|one|two|three|four|five|six)\b")
            .expect("text-number pattern is valid");
}

/// Parse the leading quantity of a line.
///
/// Returns the resolved amount and the byte offset of the first character
/// after the quantity. Alternatives are tried most-specific first so that
/// "1 1/2" resolves as a mixed number rather than the integer 1.
fn parse_leading_quantity(line: &str) -> Option<(f64, usize)> {
    if let Some(caps) = RANGE_RE.captures(line) {
        let low: f64 = caps[1].parse().ok()?;
        let high: f64 = caps[2].parse().ok()?;
        return Some(((low + high) / 2.0, caps.get(0).unwrap().end()));
    }

    if let Some(caps) = MIXED_RE.captures(line) {
        let whole: f64 = caps[1].parse().ok()?;
        let numerator: f64 = caps[2].parse().ok()?;
        let denominator: f64 = caps[3].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some((whole + numerator / denominator, caps.get(0).unwrap().end()));
    }

    if let Some(caps) = FRACTION_RE.captures(line) {
        let numerator: f64 = caps[1].parse().ok()?;
        let denominator: f64 = caps[2].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some((numerator / denominator, caps.get(0).unwrap().end()));
    }

    if let Some(caps) = DECIMAL_RE.captures(line) {
        let amount: f64 = caps[1].parse().ok()?;
        return Some((amount, caps.get(0).unwrap().end()));
    }

    if let Some(caps) = TEXT_NUMBER_RE.captures(line) {
        let amount = lookup_text_number(&caps[1])?;
        return Some((amount, caps.get(0).unwrap().end()));
    }

    None
}

/// Internal parse that also reports where the ingredient label begins.
///
/// Returns `(amount, unit, label)` where `label` is the rest of the line
/// after the quantity and any recognized unit token.
fn parse_line_parts(line: &str) -> Option<(f64, Unit, String)> {
    let trimmed = line.trim();
    let (mut amount, qty_end) = parse_leading_quantity(trimmed)?;

    let rest = trimmed[qty_end..].trim_start();

    // The next whitespace-delimited word may be a unit token. If it is not
    // in the synonym table it stays part of the label and the unit
    // defaults to ounces.
    let (unit, label) = match rest.split_whitespace().next() {
        Some(word) => match lookup_unit(word) {
            Some(lookup) => {
                amount *= lookup.amount_scale;
                let after_unit = rest[rest.find(word).unwrap_or(0) + word.len()..].trim_start();
                (lookup.unit, after_unit.to_string())
            }
            None => (Unit::Oz, rest.to_string()),
        },
        None => (Unit::Oz, String::new()),
    };

    if amount == 0.0 {
        trace!("quantity resolved to zero, treating line as unparseable: '{line}'");
        return None;
    }

    Some((amount, unit, label))
}

/// Parse one free-text ingredient line into a [`ParsedVolume`].
///
/// Returns `None` when the line has no recognizable leading quantity or
/// the quantity resolves to zero. This is the only failure signal; the
/// engine never raises an error for messy recipe text.
///
/// # Examples
///
/// ```rust
/// use jigger::line_parser::parse_ingredient_line;
/// use jigger::units::Unit;
///
/// let parsed = parse_ingredient_line("1 1/2 oz gin").unwrap();
/// assert_eq!(parsed.amount, 1.5);
///
/// let parsed = parse_ingredient_line("2 dashes Angostura bitters").unwrap();
/// assert_eq!(parsed.unit, Unit::Dash);
///
/// // No leading quantity
/// assert!(parse_ingredient_line("lemon twist for garnish").is_none());
/// ```
pub fn parse_ingredient_line(line: &str) -> Option<ParsedVolume> {
    let (amount, unit, _) = parse_line_parts(line)?;
    trace!("parsed '{line}' -> {amount} {unit}");
    Some(ParsedVolume {
        amount,
        unit,
        original: line.to_string(),
    })
}

/// The ingredient label with its quantity/unit prefix stripped.
///
/// Used for display. Lines with no recognizable quantity come back whole
/// (trimmed), since there is no prefix to strip.
///
/// # Examples
///
/// ```rust
/// use jigger::line_parser::ingredient_label;
///
/// assert_eq!(ingredient_label("2 oz Rye Whiskey"), "Rye Whiskey");
/// assert_eq!(ingredient_label("1 lemon twist"), "lemon twist");
/// assert_eq!(ingredient_label("orange peel"), "orange peel");
/// ```
pub fn ingredient_label(line: &str) -> String {
    match parse_line_parts(line) {
        Some((_, _, label)) if !label.is_empty() => label,
        _ => line.trim().to_string(),
    }
}
