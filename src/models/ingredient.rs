//! Ingredient model
//!
//! An ingredient's nutrition facts, normalized from the label's serving to
//! one kilogram of the ingredient.

use crate::error::{MixError, MixResult};
use crate::nutrition::{Kind, Measurement};

use super::MeasurementTable;

/// An ingredient with per-kilogram nutrition facts
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Serving size the facts were declared against
    pub serving: Measurement,
    per_kilogram: MeasurementTable,
}

impl Ingredient {
    /// Build an ingredient from the facts printed for one serving
    ///
    /// Each fact is divided by the serving's mass. The serving must be a
    /// finite, positive mass.
    pub fn from_serving<'a, I>(name: &str, serving: Measurement, facts: I) -> MixResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Measurement)>,
    {
        validate_serving(name, &serving)?;

        let mut per_kilogram = MeasurementTable::new();
        for (nutrient, value) in facts {
            let normalized = value.divide(serving.amount)?;
            if !per_kilogram.insert(nutrient, normalized) {
                return Err(MixError::DuplicateNutrient {
                    ingredient: name.to_string(),
                    nutrient: nutrient.to_string(),
                });
            }
        }

        tracing::debug!(
            "Ingredient '{}': {} nutrients per {}",
            name,
            per_kilogram.len(),
            serving
        );

        Ok(Self {
            name: name.to_string(),
            serving,
            per_kilogram,
        })
    }

    /// Nutrition facts for one kilogram of this ingredient
    pub fn per_kilogram(&self) -> &MeasurementTable {
        &self.per_kilogram
    }

    /// Nutrients contributed by `mass` of this ingredient
    pub fn contribution(&self, mass: &Measurement) -> MixResult<MeasurementTable> {
        mass.expect_kind(Kind::Mass)?;

        let mut table = MeasurementTable::new();
        for (nutrient, value) in self.per_kilogram.iter() {
            table.insert(nutrient, value.scale(mass.amount));
        }
        Ok(table)
    }
}

fn validate_serving(name: &str, serving: &Measurement) -> MixResult<()> {
    let reason = if serving.kind != Kind::Mass {
        format!("expected a mass, found {}", serving.kind)
    } else if !serving.amount.is_finite() {
        "amount is not a number".to_string()
    } else if serving.amount <= 0.0 {
        format!("amount must be positive, got {}", serving.amount)
    } else {
        return Ok(());
    };

    Err(MixError::InvalidServing {
        ingredient: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{CAL, G, MG, PERCENT};

    const NO_FACTS: [(&str, Measurement); 0] = [];

    fn hemp() -> Ingredient {
        Ingredient::from_serving(
            "hemp hearts",
            30.0 * G,
            [
                ("calories", 170.0 * CAL),
                ("sodium", 3.0 * MG),
                ("iron", 30.0 * PERCENT),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_normalizes_to_per_kilogram() {
        let ingredient = hemp();
        let calories = ingredient.per_kilogram().get("calories").unwrap();
        assert_eq!(calories.kind, Kind::Energy);
        assert!((calories.amount - 170.0 / 0.03).abs() < 1e-6);

        let iron = ingredient.per_kilogram().get("iron").unwrap();
        assert_eq!(iron.kind, Kind::Percent);
        assert!((iron.amount - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_contribution_for_ten_grams() {
        let table = hemp().contribution(&(10.0 * G)).unwrap();
        let calories = table.get("calories").unwrap();
        assert!((calories.amount - 56.666_666_7).abs() < 1e-6);
        assert_eq!(calories.to_string(), "56.67 calories");
    }

    #[test]
    fn test_contribution_requires_mass() {
        let err = hemp().contribution(&(10.0 * CAL)).unwrap_err();
        assert!(matches!(
            err,
            MixError::KindMismatch {
                expected: Kind::Mass,
                found: Kind::Energy
            }
        ));
        assert_eq!(err.to_string(), "Kind mismatch: expected mass, found energy");
    }

    #[test]
    fn test_zero_serving_rejected() {
        let err = Ingredient::from_serving("air", 0.0 * G, [("calories", 1.0 * CAL)])
            .unwrap_err();
        assert!(matches!(err, MixError::InvalidServing { ref ingredient, .. } if ingredient == "air"));
    }

    #[test]
    fn test_non_mass_serving_rejected() {
        let err = Ingredient::from_serving("juice", 100.0 * CAL, NO_FACTS).unwrap_err();
        assert!(matches!(err, MixError::InvalidServing { .. }));
    }

    #[test]
    fn test_nan_serving_rejected() {
        let err = Ingredient::from_serving("mystery", f64::NAN * G, NO_FACTS).unwrap_err();
        assert!(matches!(err, MixError::InvalidServing { .. }));
    }

    #[test]
    fn test_duplicate_nutrient_rejected() {
        let err = Ingredient::from_serving(
            "walnuts",
            30.0 * G,
            [("sugar", 1.0 * G), ("sugar", 2.0 * G)],
        )
        .unwrap_err();
        assert!(matches!(err, MixError::DuplicateNutrient { ref nutrient, .. } if nutrient == "sugar"));
    }
}
