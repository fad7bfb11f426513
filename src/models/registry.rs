//! Ingredient registry
//!
//! Holds every known ingredient's normalized nutrition facts. Built once,
//! read-only afterwards.

use crate::error::{MixError, MixResult};
use crate::nutrition::Measurement;

use super::Ingredient;

/// Registered ingredients, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    ingredients: Vec<Ingredient>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ingredient declared against a serving size
    pub fn declare<'a, I>(&mut self, name: &str, serving: Measurement, facts: I) -> MixResult<()>
    where
        I: IntoIterator<Item = (&'a str, Measurement)>,
    {
        self.register(Ingredient::from_serving(name, serving, facts)?)
    }

    /// Add an already built ingredient
    pub fn register(&mut self, ingredient: Ingredient) -> MixResult<()> {
        if self.get(&ingredient.name).is_some() {
            return Err(MixError::DuplicateIngredient(ingredient.name));
        }
        self.ingredients.push(ingredient);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    /// Get an ingredient, failing if it was never registered
    pub fn lookup(&self, name: &str) -> MixResult<&Ingredient> {
        self.get(name)
            .ok_or_else(|| MixError::UnknownIngredient(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{CAL, G};

    #[test]
    fn test_declare_and_lookup() {
        let mut registry = Registry::new();
        registry
            .declare("walnuts", 30.0 * G, [("calories", 200.0 * CAL)])
            .unwrap();

        let walnuts = registry.lookup("walnuts").unwrap();
        let calories = walnuts.per_kilogram().get("calories").unwrap();
        assert!((calories.amount - 200.0 / 0.03).abs() < 1e-6);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_ingredient() {
        let registry = Registry::new();
        let err = registry.lookup("pecans").unwrap_err();
        assert!(matches!(err, MixError::UnknownIngredient(ref name) if name == "pecans"));
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let mut registry = Registry::new();
        registry
            .declare("almonds", 50.0 * G, [("calories", 290.0 * CAL)])
            .unwrap();
        let err = registry
            .declare("almonds", 50.0 * G, [("calories", 290.0 * CAL)])
            .unwrap_err();
        assert!(matches!(err, MixError::DuplicateIngredient(_)));
    }

    #[test]
    fn test_invalid_serving_fails_at_declaration() {
        let mut registry = Registry::new();
        let err = registry
            .declare("nothing", 0.0 * G, [("calories", 1.0 * CAL)])
            .unwrap_err();
        assert!(matches!(err, MixError::InvalidServing { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_in_declaration_order() {
        let mut registry = Registry::new();
        registry.declare("b", 1.0 * G, [("sugar", 1.0 * G)]).unwrap();
        registry.declare("a", 1.0 * G, [("sugar", 1.0 * G)]).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
