//! Mixture model
//!
//! A recipe of relative ingredient weights plus a total serving size. Absolute
//! masses and aggregate nutrition are derived on demand.

use crate::error::{MixError, MixResult};
use crate::nutrition::{Kind, Measurement};

use super::{MeasurementTable, MixtureReport, Registry};

/// A custom food mix
#[derive(Debug, Clone)]
pub struct Mixture<'r> {
    registry: &'r Registry,
    serving: Measurement,
    /// Relative weights, in declaration order
    ingredients: Vec<(String, f64)>,
}

impl<'r> Mixture<'r> {
    /// Create a mixture of registered ingredients
    ///
    /// Weights are unit-less proportions: `{1, 2, 3}` and `{10, 20, 30}`
    /// describe the same mix.
    pub fn new<'a, I>(registry: &'r Registry, serving: Measurement, ingredients: I) -> MixResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        if serving.kind != Kind::Mass {
            return Err(MixError::InvalidMixtureServing(format!(
                "expected a mass, found {}",
                serving.kind
            )));
        }
        if !serving.amount.is_finite() || serving.amount < 0.0 {
            return Err(MixError::InvalidMixtureServing(format!(
                "amount must be a non-negative number, got {}",
                serving.amount
            )));
        }

        let mut weights: Vec<(String, f64)> = Vec::new();
        for (name, weight) in ingredients {
            registry.lookup(name)?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(MixError::InvalidWeight {
                    ingredient: name.to_string(),
                    weight,
                });
            }
            if weights.iter().any(|(existing, _)| existing == name) {
                return Err(MixError::DuplicateIngredient(name.to_string()));
            }
            if weight == 0.0 {
                tracing::warn!("Ingredient '{}' has zero weight in the mixture", name);
            }
            weights.push((name.to_string(), weight));
        }

        let mixture = Self {
            registry,
            serving,
            ingredients: weights,
        };
        mixture.fractions()?;

        tracing::info!(
            "Mixture of {} ingredients, serving {}",
            mixture.ingredients.len(),
            mixture.serving
        );
        Ok(mixture)
    }

    pub fn serving(&self) -> &Measurement {
        &self.serving
    }

    /// Relative weights as declared
    pub fn weights(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ingredients.iter().map(|(name, w)| (name.as_str(), *w))
    }

    /// Same ingredients and weights with a different serving size
    pub fn with_serving(&self, serving: Measurement) -> MixResult<Self> {
        Self::new(self.registry, serving, self.weights())
    }

    /// Each ingredient's share of the serving, in declaration order
    fn fractions(&self) -> MixResult<Vec<f64>> {
        // Weights are divided by the largest first so the sum stays finite
        let largest = self
            .ingredients
            .iter()
            .map(|(_, w)| *w)
            .fold(0.0, f64::max);
        if largest <= 0.0 {
            return Err(MixError::EmptyMixture);
        }

        let total: f64 = self.ingredients.iter().map(|(_, w)| w / largest).sum();
        Ok(self
            .ingredients
            .iter()
            .map(|(_, w)| w / largest / total)
            .collect())
    }

    /// Absolute mass of each ingredient in one serving
    pub fn amounts(&self) -> MixResult<MeasurementTable> {
        let fractions = self.fractions()?;

        let mut amounts = MeasurementTable::new();
        for ((name, _), fraction) in self.ingredients.iter().zip(fractions) {
            amounts.insert(name, self.serving.scale(fraction));
        }
        Ok(amounts)
    }

    /// Aggregate nutrition of one serving
    ///
    /// Nutrients are the union over all ingredients, in first-seen order.
    pub fn nutrition(&self) -> MixResult<MeasurementTable> {
        let mut totals = MeasurementTable::new();

        for (name, mass) in self.amounts()?.iter() {
            let ingredient = self.registry.lookup(name)?;
            for (nutrient, value) in ingredient.contribution(mass)?.iter() {
                totals.accumulate(nutrient, *value)?;
            }
            tracing::debug!("Added {} of '{}'", mass, name);
        }

        Ok(totals)
    }

    pub fn report(&self) -> MixResult<MixtureReport> {
        Ok(MixtureReport::new(
            &self.serving,
            &self.amounts()?,
            &self.nutrition()?,
        ))
    }

    /// Text report: serving size, ingredient masses, then nutrition
    pub fn render(&self) -> MixResult<String> {
        Ok(self.report()?.to_string())
    }
}
