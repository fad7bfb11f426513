//! Data models
//!
//! Ingredients, the registry that holds them, mixtures and their reports.

mod ingredient;
mod mixture;
mod registry;
mod report;
mod table;

pub use ingredient::Ingredient;
pub use mixture::Mixture;
pub use registry::Registry;
pub use report::{FormattedMeasurement, MixtureReport, ReportLine};
pub use table::MeasurementTable;
