//! # Jigger
//!
//! Volume, dilution and ABV calculation engine for cocktail recipes.
//!
//! The engine is a pure, synchronous, stateless computation library: every
//! public function reads only its arguments and fixed static lookup tables
//! (unit table, garnish patterns, ABV table), so it is safe to call from
//! any number of threads without coordination. Free-text recipe data is
//! handled best effort: lines that cannot be parsed contribute zero volume
//! rather than raising errors.
//!
//! ## Modules
//!
//! - [`units`]: recognized measurement units and their milliliter
//!   equivalents, plus the text-number vocabulary
//! - [`line_parser`]: quantity/unit extraction from free-text ingredient
//!   lines (fractions, mixed numbers, ranges, number words, synonyms)
//! - [`volume`]: total-volume aggregation and target-overage comparison
//! - [`reduction`]: reducibility classification and quantity rewriting
//! - [`preparation`]: instruction-text classification into a preparation
//!   method with its dilution percentage
//! - [`abv_table`]: static ingredient-name to ABV-percent lookup
//! - [`dilution`]: combined dilution and ABV model of the finished drink
//!
//! ## Usage
//!
//! ```rust
//! use jigger::{calculate_complete_drink_metrics, total_volume_oz};
//!
//! let ingredients = vec![
//!     "2 oz bourbon".to_string(),
//!     "0.75 oz lemon juice".to_string(),
//!     "0.5 oz simple syrup".to_string(),
//! ];
//!
//! assert_eq!(total_volume_oz(&ingredients), 3.25);
//!
//! let metrics = calculate_complete_drink_metrics(
//!     &ingredients,
//!     "Shake with ice and strain",
//!     None,
//! );
//! assert!(metrics.final_abv < metrics.base_abv);
//! ```

pub mod abv_table;
pub mod dilution;
pub mod line_parser;
pub mod preparation;
pub mod reduction;
pub mod units;
pub mod volume;

pub use abv_table::abv_for_ingredient;
pub use dilution::{
    calculate_complete_drink_metrics, dilution_info, CompleteDrinkMetrics, DilutionInfo,
};
pub use line_parser::{ingredient_label, parse_ingredient_line, ParsedVolume};
pub use preparation::{
    detect_preparation_method, detect_preparation_method_lines, PreparationMethod,
};
pub use reduction::{apply_reductions, classify_reducible_ingredients, ReducibleIngredient};
pub use units::{Unit, ML_PER_OZ};
pub use volume::{
    calculate_volume_overage, parse_target_volume, total_volume_oz, VolumeOverageResult,
};
