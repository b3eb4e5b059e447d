//! # Drink Metrics Example
//!
//! Walks a cocktail recipe through the full engine: parsing ingredient
//! lines, totaling volume, classifying which lines can be reduced,
//! applying a reduction, and modeling dilution and ABV for the finished
//! drink. Run with `RUST_LOG=debug` to see the engine's decisions.

use jigger::{
    apply_reductions, calculate_complete_drink_metrics, calculate_volume_overage,
    classify_reducible_ingredients, total_volume_oz,
};
use std::collections::HashMap;

fn main() {
    env_logger::init();

    println!("🍸 Drink Metrics Example");
    println!("========================\n");

    let ingredients: Vec<String> = [
        "2 oz rye whiskey",
        "1 oz sweet vermouth",
        "2 dashes angostura bitters",
        "1 brandied cherry (garnish)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    println!("Recipe:");
    for line in &ingredients {
        println!("  - {line}");
    }

    // Total volume
    let total = total_volume_oz(&ingredients);
    println!("\nTotal volume: {total} oz");

    // Suppose a substitution added half an ounce and the drink should fit
    // a 3 oz pour
    let modified: Vec<String> = ingredients
        .iter()
        .cloned()
        .chain(["0.5 oz amaro".to_string()])
        .collect();
    let overage = calculate_volume_overage(&ingredients, &modified, Some("3 oz"));
    println!(
        "\nAfter adding 0.5 oz amaro: {} oz ({} oz over target, rebalance: {})",
        overage.new_volume_oz, overage.overage_oz, overage.requires_balance
    );

    // Which lines can give volume back?
    println!("\nReducible ingredients:");
    let classified = classify_reducible_ingredients(&modified);
    for item in &classified {
        if item.is_reducible {
            println!(
                "  [{}] {} — {} oz, reducible down to {} oz",
                item.index, item.label, item.current_amount_oz, item.min_amount_oz
            );
        } else {
            println!("  [{}] {} — not reducible", item.index, item.label);
        }
    }

    // Take the overage out of the vermouth
    let reductions = HashMap::from([(1, overage.overage_oz)]);
    let rebalanced = apply_reductions(&modified, &reductions);
    println!("\nRebalanced recipe:");
    for line in &rebalanced {
        println!("  - {line}");
    }
    println!("New total: {} oz", total_volume_oz(&rebalanced));

    // Finished-drink model
    let metrics = calculate_complete_drink_metrics(
        &rebalanced,
        "Stir with ice and strain into a chilled coupe",
        None,
    );
    println!("\nFinished drink ({} at {:.0}% dilution):", metrics.method, metrics.dilution_percent * 100.0);
    println!("  base volume:  {} oz", metrics.base_volume_oz);
    println!("  water added:  {} oz", metrics.water_added_oz);
    println!("  final volume: {} oz", metrics.final_volume_oz);
    println!("  base ABV:     {}%", metrics.base_abv);
    println!("  final ABV:    {}%", metrics.final_abv);
}
