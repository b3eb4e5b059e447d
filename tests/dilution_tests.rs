#[cfg(test)]
mod tests {
    use jigger::dilution::{calculate_complete_drink_metrics, dilution_info, CompleteDrinkMetrics};
    use jigger::preparation::{detect_preparation_method, PreparationMethod};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const ALL_METHODS: [PreparationMethod; 6] = [
        PreparationMethod::Shaken,
        PreparationMethod::Stirred,
        PreparationMethod::Built,
        PreparationMethod::Blended,
        PreparationMethod::Thrown,
        PreparationMethod::Unknown,
    ];

    #[test]
    fn test_shaken_detection_scenario() {
        assert_eq!(
            detect_preparation_method("Shake all ingredients with ice and strain"),
            PreparationMethod::Shaken
        );
    }

    #[test]
    fn test_martini_scenario() {
        let ingredients = lines(&["2 oz vodka", "0.5 oz vermouth"]);
        let metrics = calculate_complete_drink_metrics(
            &ingredients,
            "Stir and strain into a chilled glass",
            None,
        );

        assert_eq!(metrics.method, PreparationMethod::Stirred);
        assert_eq!(metrics.dilution_percent, 0.22);
        assert_eq!(metrics.base_volume_oz, 2.5);
        assert_eq!(metrics.final_volume_oz, 3.05);
        assert_eq!(metrics.base_abv, 35.6);
        assert!(metrics.final_abv < metrics.base_abv);
    }

    #[test]
    fn test_dilution_law_holds_for_every_method() {
        let ingredients = lines(&["2 oz rum", "1 oz pineapple juice"]);

        for method in ALL_METHODS {
            let metrics = calculate_complete_drink_metrics(&ingredients, "", Some(method));
            assert!(metrics.final_volume_oz >= metrics.base_volume_oz, "{method}");
            assert!(metrics.final_abv < metrics.base_abv, "{method}");
            assert!(metrics.dilution_factor <= 1.0, "{method}");
        }
    }

    #[test]
    fn test_water_added_tracks_dilution_percent() {
        let ingredients = lines(&["3 oz white rum"]);

        let mut by_percent: Vec<(f64, f64)> = ALL_METHODS
            .iter()
            .map(|&method| {
                let info = dilution_info(&ingredients, "", Some(method));
                (method.dilution_percent(), info.water_added_oz)
            })
            .collect();
        by_percent.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        for window in by_percent.windows(2) {
            assert!(
                window[0].1 < window[1].1,
                "ordering by dilution percent must order water added"
            );
        }
    }

    #[test]
    fn test_garnish_lines_do_not_affect_metrics() {
        let base = lines(&["2 oz gin", "0.5 oz dry vermouth"]);
        let with_garnish = lines(&["2 oz gin", "0.5 oz dry vermouth", "olive for garnish"]);

        let a = calculate_complete_drink_metrics(&base, "Stir", None);
        let b = calculate_complete_drink_metrics(&with_garnish, "Stir", None);

        assert_eq!(a.base_volume_oz, b.base_volume_oz);
        assert_eq!(a.base_abv, b.base_abv);
    }

    #[test]
    fn test_metrics_serialize_to_json() {
        let ingredients = lines(&["2 oz bourbon", "0.25 oz demerara syrup"]);
        let metrics = calculate_complete_drink_metrics(&ingredients, "Stir with ice", None);

        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"method\":\"stirred\""));

        let back: CompleteDrinkMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }

    #[test]
    fn test_blended_daiquiri_higher_dilution_than_shaken() {
        let ingredients = lines(&["2 oz white rum", "1 oz lime juice", "0.75 oz simple syrup"]);

        let shaken = calculate_complete_drink_metrics(&ingredients, "Shake hard with ice", None);
        let blended =
            calculate_complete_drink_metrics(&ingredients, "Blend with crushed ice", None);

        assert!(blended.final_volume_oz > shaken.final_volume_oz);
        assert!(blended.final_abv < shaken.final_abv);
    }
}
