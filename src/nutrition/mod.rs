//! Measurement module
//!
//! Typed quantities and the unit tables used to display them.

pub mod measurement;
pub mod units;

pub use measurement::{Measurement, CAL, G, KG, MG, PERCENT};
pub use units::{select_display_unit, DisplayUnit, Kind, DISPLAY_THRESHOLD};
