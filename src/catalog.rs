//! Built-in ingredient catalog
//!
//! Nutrition facts as printed on each ingredient's label, per serving.
//! Percentages are percent of daily value.

use crate::error::MixResult;
use crate::models::{Mixture, Registry};
use crate::nutrition::{CAL, G, MG, PERCENT};

/// Build the registry of every catalog ingredient
pub fn builtin_registry() -> MixResult<Registry> {
    let mut registry = Registry::new();

    registry.declare(
        "hemp hearts",
        30.0 * G,
        [
            ("calories", 170.0 * CAL),
            ("saturated", 1.5 * G),
            ("omega6", 8.0 * G),
            ("omega3", 2.5 * G),
            ("monounsaturated", 1.5 * G),
            ("sodium", 3.0 * MG),
            ("fibre", 3.0 * G),
            ("sugar", 1.0 * G),
            ("protein", 10.0 * G),
            ("calcium", 2.0 * PERCENT),
            ("iron", 30.0 * PERCENT),
            ("thiamine", 30.0 * PERCENT),
            ("riboflavin", 6.0 * PERCENT),
            ("b6", 10.0 * PERCENT),
            ("folate", 15.0 * PERCENT),
            ("phosphorus", 40.0 * PERCENT),
            ("magnesium", 70.0 * PERCENT),
            ("zinc", 30.0 * PERCENT),
            ("manganese", 110.0 * PERCENT),
        ],
    )?;

    registry.declare(
        "walnuts",
        30.0 * G,
        [
            ("calories", 200.0 * CAL),
            ("saturated", 2.0 * G),
            ("fibre", 2.0 * G),
            ("sugar", 1.0 * G),
            ("protein", 5.0 * G),
            ("calcium", 2.0 * PERCENT),
            ("iron", 4.0 * PERCENT),
        ],
    )?;

    registry.declare(
        "almonds",
        50.0 * G,
        [
            ("calories", 290.0 * CAL),
            ("saturated", 2.0 * G),
            ("potassium", 360.0 * MG),
            ("fibre", 6.0 * G),
            ("sugar", 2.0 * G),
            ("protein", 11.0 * G),
            ("calcium", 10.0 * PERCENT),
            ("iron", 15.0 * PERCENT),
        ],
    )?;

    registry.declare(
        "chia seeds",
        20.0 * G,
        [
            ("calories", 77.0 * CAL),
            ("saturated", 0.7 * G),
            ("omega3", 4.8 * G),
            ("omega6", 1.2 * G),
            ("monounsaturated", 0.4 * G),
            ("sodium", 4.0 * MG),
            // label says "fibres"; kept on the shared fibre line
            ("fibre", 7.0 * G),
            ("protein", 4.0 * G),
            ("c", 2.0 * PERCENT),
            ("calcium", 15.0 * PERCENT),
            ("iron", 9.0 * PERCENT),
            ("magnesium", 24.0 * PERCENT),
        ],
    )?;

    registry.declare(
        "flax seeds",
        20.0 * G,
        [
            ("calories", 90.0 * CAL),
            ("saturated", 0.5 * G),
            ("omega3", 3.6 * G),
            // interpolated from several labels
            ("omega6", 1.0 * G),
            ("monounsaturated", 1.5 * G),
            ("sodium", 5.0 * MG),
            ("fibre", 6.0 * G),
            ("protein", 4.0 * G),
            ("calcium", 8.0 * PERCENT),
            ("iron", 6.0 * PERCENT),
        ],
    )?;

    registry.declare(
        "buckwheat groats",
        100.0 * G,
        [
            ("calories", 346.0 * CAL),
            ("saturated", 0.6 * G),
            // label lists polyunsaturated only
            ("omega3", 0.8 * G),
            ("monounsaturated", 0.8 * G),
            ("sodium", 11.0 * MG),
            ("potassium", 320.0 * MG),
            ("fibre", 10.3 * G),
            ("protein", 12.0 * G),
            ("calcium", 2.0 * PERCENT),
            ("iron", 14.0 * PERCENT),
        ],
    )?;

    tracing::debug!("Catalog registry built with {} ingredients", registry.len());
    Ok(registry)
}

/// The house mix: a 60 g serving of seeds, nuts and groats
pub fn default_mix(registry: &Registry) -> MixResult<Mixture<'_>> {
    Mixture::new(
        registry,
        60.0 * G,
        [
            ("hemp hearts", 5.0),
            ("walnuts", 8.0),
            ("almonds", 8.0),
            ("chia seeds", 3.0),
            ("flax seeds", 2.0),
            ("buckwheat groats", 1.0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Kind;

    #[test]
    fn test_catalog_builds() {
        let registry = builtin_registry().unwrap();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![
                "hemp hearts",
                "walnuts",
                "almonds",
                "chia seeds",
                "flax seeds",
                "buckwheat groats"
            ]
        );
    }

    #[test]
    fn test_hemp_hearts_calories_per_kilogram() {
        let registry = builtin_registry().unwrap();
        let calories = *registry
            .lookup("hemp hearts")
            .unwrap()
            .per_kilogram()
            .get("calories")
            .unwrap();
        assert_eq!(calories.kind, Kind::Energy);
        assert!((calories.amount - 5666.666_666_7).abs() < 1e-6);
    }

    #[test]
    fn test_default_mix_amounts() {
        let registry = builtin_registry().unwrap();
        let mix = default_mix(&registry).unwrap();
        let amounts = mix.amounts().unwrap();

        // 60 g split 5:8:8:3:2:1 over 27 parts
        let walnuts = amounts.get("walnuts").unwrap();
        assert!((walnuts.amount - 0.06 * 8.0 / 27.0).abs() < 1e-12);
        assert_eq!(walnuts.to_string(), "17.78 grams");
        assert_eq!(
            amounts.get("buckwheat groats").unwrap().to_string(),
            "2.22 grams"
        );
    }

    #[test]
    fn test_default_mix_report() {
        let registry = builtin_registry().unwrap();
        let text = default_mix(&registry).unwrap().render().unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Serving Size: 60.00 grams");
        assert_eq!(lines[1], "  hemp hearts      11.11 grams");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "NUTRITION");
        assert!(lines[9].starts_with("  calories        "));
        assert!(text.contains("  manganese       "));
        assert!(text.contains("  potassium       "));
    }

    #[test]
    fn test_chia_fibre_shares_the_fibre_line() {
        let registry = builtin_registry().unwrap();
        let chia = registry.lookup("chia seeds").unwrap();
        assert!(chia.per_kilogram().contains("fibre"));

        let text = default_mix(&registry).unwrap().render().unwrap();
        assert_eq!(text.matches("  fibre").count(), 1);
        assert!(!text.contains("fibres"));
    }

    #[test]
    fn test_default_mix_calories() {
        let registry = builtin_registry().unwrap();
        let nutrition = default_mix(&registry).unwrap().nutrition().unwrap();

        let expected: f64 = [
            (5.0, 170.0 / 30.0),
            (8.0, 200.0 / 30.0),
            (8.0, 290.0 / 50.0),
            (3.0, 77.0 / 20.0),
            (2.0, 90.0 / 20.0),
            (1.0, 346.0 / 100.0),
        ]
        .iter()
        .map(|(weight, per_gram)| 60.0 * weight / 27.0 * per_gram)
        .sum();

        let calories = nutrition.get("calories").unwrap();
        assert!((calories.amount - expected).abs() < 1e-6);
    }
}
