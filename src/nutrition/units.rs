//! Unit types and conversion constants
//!
//! Provides the measurement kinds, their canonical units, and the ordered
//! tables used to pick a human-readable unit for display.

use std::fmt;

use serde::Serialize;

/// Dimensional category of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Stored in kilograms
    Mass,
    /// Stored in calories
    Energy,
    /// Stored in percent-points of daily value
    Percent,
}

impl Kind {
    /// Get the canonical unit string for this kind
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            Kind::Mass => "kilograms",
            Kind::Energy => "calories",
            Kind::Percent => "percent",
        }
    }

    /// Ordered display table for this kind, tried first to last
    pub fn display_units(&self) -> &'static [DisplayUnit] {
        match self {
            Kind::Mass => MASS_UNITS,
            Kind::Energy => ENERGY_UNITS,
            Kind::Percent => PERCENT_UNITS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Mass => "mass",
            Kind::Energy => "energy",
            Kind::Percent => "percent",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display unit: canonical amount times `multiplier` is the value in `label`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayUnit {
    pub multiplier: f64,
    pub label: &'static str,
}

impl DisplayUnit {
    const fn new(multiplier: f64, label: &'static str) -> Self {
        Self { multiplier, label }
    }
}

// ============================================================================
// Display Tables
// ============================================================================

/// Smallest scaled value accepted when picking a display unit
pub const DISPLAY_THRESHOLD: f64 = 0.1;

/// Mass display units, largest unit first
pub const MASS_UNITS: &[DisplayUnit] = &[
    DisplayUnit::new(1.0, "kilograms"),
    DisplayUnit::new(1_000.0, "grams"),
    DisplayUnit::new(1_000_000.0, "milligrams"),
];

/// Energy display units
pub const ENERGY_UNITS: &[DisplayUnit] = &[DisplayUnit::new(1.0, "calories")];

/// Percent display units
pub const PERCENT_UNITS: &[DisplayUnit] = &[DisplayUnit::new(1.0, "percent")];

// ============================================================================
// Mass Conversion Constants (to kilograms)
// ============================================================================

/// Kilograms per gram
pub const KG_PER_G: f64 = 0.001;
/// Kilograms per milligram
pub const KG_PER_MG: f64 = 0.000_001;

/// Pick the display unit for a canonical amount of the given kind
///
/// Returns the scaled value and the unit label. The first unit whose scaled
/// value reaches [`DISPLAY_THRESHOLD`] wins; when none does, the last
/// (smallest) unit is used.
pub fn select_display_unit(kind: Kind, amount: f64) -> (f64, &'static str) {
    let units = kind.display_units();

    for unit in units {
        let scaled = amount * unit.multiplier;
        if scaled >= DISPLAY_THRESHOLD {
            return (scaled, unit.label);
        }
    }

    // Every table has at least one entry
    let smallest = units[units.len() - 1];
    tracing::debug!(
        "No {} unit reaches {} for amount {}; using {}",
        kind,
        DISPLAY_THRESHOLD,
        amount,
        smallest.label
    );
    (amount * smallest.multiplier, smallest.label)
}
