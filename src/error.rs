//! Error types
//!
//! Every failure is fatal: the run aborts with the error's message.

use thiserror::Error;

use crate::nutrition::Kind;

/// Mixture calculation error types
#[derive(Debug, Error)]
pub enum MixError {
    #[error("Kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: Kind, found: Kind },

    #[error("Invalid serving size for '{ingredient}': {reason}")]
    InvalidServing { ingredient: String, reason: String },

    #[error("Mixture is empty: ingredient weights sum to zero")]
    EmptyMixture,

    #[error("Unknown ingredient: '{0}'")]
    UnknownIngredient(String),

    #[error("Invalid mixture serving size: {0}")]
    InvalidMixtureServing(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Dividing {amount} by {divisor} does not give a finite number")]
    NonFiniteQuotient { amount: f64, divisor: f64 },

    #[error("Invalid weight {weight} for ingredient '{ingredient}'")]
    InvalidWeight { ingredient: String, weight: f64 },

    #[error("Ingredient '{0}' is declared more than once")]
    DuplicateIngredient(String),

    #[error("Nutrient '{nutrient}' is declared more than once for '{ingredient}'")]
    DuplicateNutrient { ingredient: String, nutrient: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for mixture operations
pub type MixResult<T> = Result<T, MixError>;
