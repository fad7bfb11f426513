//! Nutrition Mix Calculator Library
//!
//! Computes the nutrition facts of a custom food mix from per-ingredient
//! label facts and relative ingredient proportions.

pub mod catalog;
pub mod error;
pub mod models;
pub mod nutrition;

pub use error::{MixError, MixResult};
