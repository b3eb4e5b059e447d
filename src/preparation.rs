//! # Preparation Method Detection
//!
//! Classifies free-text cocktail instructions into a preparation method
//! (shaken, stirred, built, blended, thrown) by keyword matching. Each
//! method carries a fixed dilution percentage used by the dilution model.
//!
//! Methods are checked in a fixed priority order so ambiguous text
//! containing cues for several methods classifies deterministically:
//! blended, then shaken, then stirred, then thrown, then built. "Shake,
//! then build over ice" is therefore shaken.
//!
//! ## Usage
//!
//! ```rust
//! use jigger::preparation::{detect_preparation_method, PreparationMethod};
//!
//! let method = detect_preparation_method("Shake all ingredients with ice and strain");
//! assert_eq!(method, PreparationMethod::Shaken);
//! assert_eq!(method.dilution_percent(), 0.27);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a drink is prepared, which determines how much water melts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreparationMethod {
    /// Shaken with ice
    Shaken,
    /// Stirred over ice
    Stirred,
    /// Built directly in the serving glass
    Built,
    /// Blended with ice
    Blended,
    /// Thrown between tins
    Thrown,
    /// No recognizable preparation cue
    Unknown,
}

impl PreparationMethod {
    /// Fraction of the base volume added as meltwater by this method.
    pub fn dilution_percent(&self) -> f64 {
        match self {
            PreparationMethod::Shaken => 0.27,
            PreparationMethod::Stirred => 0.22,
            PreparationMethod::Built => 0.10,
            PreparationMethod::Blended => 0.35,
            PreparationMethod::Thrown => 0.18,
            PreparationMethod::Unknown => 0.20,
        }
    }

    /// Lowercase name, matching the wire representation.
    pub fn name(&self) -> &'static str {
        match self {
            PreparationMethod::Shaken => "shaken",
            PreparationMethod::Stirred => "stirred",
            PreparationMethod::Built => "built",
            PreparationMethod::Blended => "blended",
            PreparationMethod::Thrown => "thrown",
            PreparationMethod::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PreparationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Keyword sets per method, in detection priority order. Thrown sits
/// before built on purpose; its dilution constant is lower than
/// stirred's but instruction text mentioning a throw should win over an
/// incidental "build" cue.
const METHOD_KEYWORDS: &[(PreparationMethod, &[&str])] = &[
    (
        PreparationMethod::Blended,
        &["blend", "blender", "blitz"],
    ),
    (
        PreparationMethod::Shaken,
        &["shake", "shaken", "shaking", "dry shake", "whip"],
    ),
    (
        PreparationMethod::Stirred,
        &["stir", "stirred", "stirring"],
    ),
    (
        PreparationMethod::Thrown,
        &["throw", "thrown", "throwing", "cuban roll", "rolling"],
    ),
    (
        PreparationMethod::Built,
        &["build", "built", "in the glass", "directly in", "pour over ice", "top with"],
    ),
];

/// Classify instruction text into a preparation method.
///
/// Matching is case-insensitive substring search in the fixed priority
/// order blended, shaken, stirred, thrown, built; text with no cue at all
/// yields [`PreparationMethod::Unknown`].
pub fn detect_preparation_method(instructions: &str) -> PreparationMethod {
    let text = instructions.to_lowercase();

    for (method, keywords) in METHOD_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            debug!("instructions classified as {method}");
            return *method;
        }
    }

    debug!("no preparation cue found, classifying as unknown");
    PreparationMethod::Unknown
}

/// Classify instructions arriving as a list of steps.
///
/// Joins the steps with spaces and defers to
/// [`detect_preparation_method`], so the same priority order applies
/// across step boundaries.
pub fn detect_preparation_method_lines(instructions: &[String]) -> PreparationMethod {
    detect_preparation_method(&instructions.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_shaken() {
        assert_eq!(
            detect_preparation_method("Shake all ingredients with ice and strain"),
            PreparationMethod::Shaken
        );
        assert_eq!(
            detect_preparation_method("Dry shake, then shake with ice"),
            PreparationMethod::Shaken
        );
    }

    #[test]
    fn test_detect_stirred() {
        assert_eq!(
            detect_preparation_method("Stir with ice and strain into a chilled coupe"),
            PreparationMethod::Stirred
        );
        assert_eq!(
            detect_preparation_method("STIRRING gently for 30 seconds"),
            PreparationMethod::Stirred
        );
    }

    #[test]
    fn test_detect_built() {
        assert_eq!(
            detect_preparation_method("Build in a highball over fresh ice"),
            PreparationMethod::Built
        );
        assert_eq!(
            detect_preparation_method("Pour over ice and top with soda"),
            PreparationMethod::Built
        );
    }

    #[test]
    fn test_detect_blended() {
        assert_eq!(
            detect_preparation_method("Blend with crushed ice until smooth"),
            PreparationMethod::Blended
        );
    }

    #[test]
    fn test_detect_thrown() {
        assert_eq!(
            detect_preparation_method("Throw between tins to aerate"),
            PreparationMethod::Thrown
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(
            detect_preparation_method("Serve immediately"),
            PreparationMethod::Unknown
        );
        assert_eq!(detect_preparation_method(""), PreparationMethod::Unknown);
    }

    #[test]
    fn test_priority_order_on_ambiguous_text() {
        // Shaken is checked before built
        assert_eq!(
            detect_preparation_method("Shake, then build over fresh ice"),
            PreparationMethod::Shaken
        );
        // Blended is checked before shaken
        assert_eq!(
            detect_preparation_method("Shake briefly, then blend with ice"),
            PreparationMethod::Blended
        );
        // Thrown is checked before built
        assert_eq!(
            detect_preparation_method("Throw the mix, then build in the glass"),
            PreparationMethod::Thrown
        );
        // Stirred is checked before thrown
        assert_eq!(
            detect_preparation_method("Stir, throwing in a few mint leaves"),
            PreparationMethod::Stirred
        );
    }

    #[test]
    fn test_dilution_constants() {
        assert_eq!(PreparationMethod::Shaken.dilution_percent(), 0.27);
        assert_eq!(PreparationMethod::Stirred.dilution_percent(), 0.22);
        assert_eq!(PreparationMethod::Built.dilution_percent(), 0.10);
        assert_eq!(PreparationMethod::Blended.dilution_percent(), 0.35);
        assert_eq!(PreparationMethod::Thrown.dilution_percent(), 0.18);
        assert_eq!(PreparationMethod::Unknown.dilution_percent(), 0.20);
    }

    #[test]
    fn test_detect_from_instruction_list() {
        let steps = vec![
            "Combine all ingredients in a mixing glass".to_string(),
            "Stir until well chilled".to_string(),
            "Strain into a coupe".to_string(),
        ];
        assert_eq!(
            detect_preparation_method_lines(&steps),
            PreparationMethod::Stirred
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PreparationMethod::Shaken.to_string(), "shaken");
        assert_eq!(PreparationMethod::Unknown.to_string(), "unknown");
    }
}
