//! # Ingredient ABV Lookup
//!
//! Static mapping from ingredient-name fragments to alcohol-by-volume
//! percentages, plus the name normalization that makes free-text lines
//! matchable against it.
//!
//! The table is ordered and scanned front to back; the first key found as
//! a substring of the normalized name wins. Specific names therefore sit
//! before their generic suffixes ("sloe gin" before "gin", "ginger beer"
//! before "beer").

use crate::line_parser::ingredient_label;
use log::trace;

/// Ordered ingredient-name fragment -> percent ABV.
///
/// Values follow common bottling strengths; products vary, but these are
/// close enough for dilution estimates on a recipe card.
pub const ABV_TABLE: &[(&str, f64)] = &[
    // High-proof and specifically named spirits before their bases
    ("everclear", 95.0),
    ("overproof rum", 63.0),
    ("navy strength gin", 57.0),
    ("absinthe", 62.0),
    ("green chartreuse", 55.0),
    ("yellow chartreuse", 40.0),
    ("chartreuse", 55.0),
    ("sloe gin", 26.0),
    // "ginger ..." would otherwise match the "gin" entry by substring
    ("ginger", 0.0),
    // Base spirits
    ("vodka", 40.0),
    ("gin", 40.0),
    ("white rum", 40.0),
    ("dark rum", 40.0),
    ("aged rum", 40.0),
    ("rum", 40.0),
    ("blanco tequila", 40.0),
    ("reposado", 40.0),
    ("anejo", 40.0),
    ("tequila", 40.0),
    ("mezcal", 42.0),
    ("bourbon", 45.0),
    ("rye whiskey", 45.0),
    ("rye", 45.0),
    ("scotch", 43.0),
    ("irish whiskey", 40.0),
    ("whiskey", 43.0),
    ("whisky", 43.0),
    ("cognac", 40.0),
    ("armagnac", 40.0),
    ("brandy", 40.0),
    ("pisco", 41.0),
    ("cachaca", 40.0),
    ("grappa", 42.0),
    ("aquavit", 40.0),
    // Liqueurs and amari
    ("cointreau", 40.0),
    ("grand marnier", 40.0),
    ("triple sec", 30.0),
    ("blue curacao", 25.0),
    ("curacao", 25.0),
    ("maraschino", 32.0),
    ("amaretto", 24.0),
    ("campari", 24.0),
    ("aperol", 11.0),
    ("fernet", 39.0),
    ("amaro", 30.0),
    ("benedictine", 40.0),
    ("drambuie", 40.0),
    ("chambord", 16.5),
    ("st-germain", 20.0),
    ("elderflower", 20.0),
    ("falernum", 11.0),
    ("allspice dram", 22.5),
    ("coffee liqueur", 20.0),
    ("kahlua", 20.0),
    ("irish cream", 17.0),
    ("creme de cassis", 20.0),
    ("creme de violette", 20.0),
    ("creme de menthe", 25.0),
    ("creme de cacao", 25.0),
    ("limoncello", 28.0),
    ("midori", 20.0),
    ("liqueur", 25.0),
    // Fortified and aromatized wines
    ("dry vermouth", 18.0),
    ("sweet vermouth", 16.0),
    ("vermouth", 18.0),
    ("fino", 15.0),
    ("sherry", 17.0),
    ("port", 20.0),
    ("madeira", 19.0),
    ("lillet", 17.0),
    ("cocchi americano", 16.5),
    ("dubonnet", 14.8),
    ("sake", 15.0),
    // Wine and beer
    ("champagne", 12.0),
    ("prosecco", 11.0),
    ("sparkling wine", 12.0),
    ("red wine", 13.5),
    ("white wine", 12.5),
    ("wine", 13.0),
    ("beer", 5.0),
    ("cider", 5.0),
    // Bitters
    ("angostura", 44.7),
    ("peychaud", 35.0),
    ("orange bitters", 28.0),
    ("bitters", 44.7),
];

/// Fold common accented characters to their ASCII base.
///
/// Enough coverage for bar vocabulary (creme, curacao, anejo, rose);
/// anything outside the map passes through unchanged.
fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Drop parenthetical asides: "curaçao (dry)" -> "curaçao".
fn strip_parentheticals(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }
    result
}

/// Normalize an ingredient line for ABV table matching.
///
/// Strips the leading quantity/unit prefix, drops parentheticals, folds
/// accents, lowercases and collapses whitespace.
///
/// # Examples
///
/// ```rust
/// use jigger::abv_table::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("2 oz Crème de Cacao"), "creme de cacao");
/// assert_eq!(normalize_ingredient_name("1 oz curaçao (dry)"), "curacao");
/// ```
pub fn normalize_ingredient_name(line: &str) -> String {
    let label = ingredient_label(line);
    let folded = fold_accents(&strip_parentheticals(&label).to_lowercase());
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Percent ABV for an ingredient line, 0.0 when nothing in the table
/// matches (juices, syrups, soda and other non-alcoholic ingredients are
/// simply absent from the table).
pub fn abv_for_ingredient(line: &str) -> f64 {
    let name = normalize_ingredient_name(line);
    for (key, percent) in ABV_TABLE {
        if name.contains(key) {
            trace!("'{line}' matched ABV key '{key}' ({percent}%)");
            return *percent;
        }
    }
    trace!("'{line}' matched no ABV key, assuming non-alcoholic");
    0.0
}
