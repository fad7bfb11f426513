//! Measurement value type
//!
//! A quantity tagged with its [`Kind`] and stored in the kind's canonical
//! unit. Unit constants behave as multipliers, so `30.0 * G` is thirty grams.

use std::fmt;
use std::ops::Mul;

use serde::Serialize;

use super::units::{select_display_unit, Kind, KG_PER_G, KG_PER_MG};
use crate::error::{MixError, MixResult};

/// One kilogram
pub const KG: Measurement = Measurement::new(Kind::Mass, 1.0);
/// One gram
pub const G: Measurement = Measurement::new(Kind::Mass, KG_PER_G);
/// One milligram
pub const MG: Measurement = Measurement::new(Kind::Mass, KG_PER_MG);
/// One calorie
pub const CAL: Measurement = Measurement::new(Kind::Energy, 1.0);
/// One percent of daily value
pub const PERCENT: Measurement = Measurement::new(Kind::Percent, 1.0);

/// A typed quantity in canonical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub kind: Kind,
    /// Amount in the kind's canonical unit
    pub amount: f64,
}

impl Measurement {
    pub const fn new(kind: Kind, amount: f64) -> Self {
        Self { kind, amount }
    }

    /// A zero amount of the given kind
    pub const fn zero(kind: Kind) -> Self {
        Self::new(kind, 0.0)
    }

    pub fn kilograms(amount: f64) -> Self {
        amount * KG
    }

    pub fn grams(amount: f64) -> Self {
        amount * G
    }

    pub fn milligrams(amount: f64) -> Self {
        amount * MG
    }

    pub fn calories(amount: f64) -> Self {
        amount * CAL
    }

    pub fn percent(amount: f64) -> Self {
        amount * PERCENT
    }

    /// Scale by a plain number, keeping the kind
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.kind, scalar * self.amount)
    }

    /// Add a measurement of the same kind
    pub fn checked_add(&self, other: &Measurement) -> MixResult<Self> {
        other.expect_kind(self.kind)?;
        Ok(Self::new(self.kind, self.amount + other.amount))
    }

    /// Divide by a plain number
    ///
    /// Fails on a zero divisor or any result that is not finite.
    pub fn divide(&self, scalar: f64) -> MixResult<Self> {
        if scalar == 0.0 {
            return Err(MixError::DivisionByZero);
        }
        let amount = self.amount / scalar;
        if !amount.is_finite() {
            return Err(MixError::NonFiniteQuotient {
                amount: self.amount,
                divisor: scalar,
            });
        }
        Ok(Self::new(self.kind, amount))
    }

    /// Dimensionless ratio between two measurements of the same kind
    pub fn ratio(&self, other: &Measurement) -> MixResult<f64> {
        other.expect_kind(self.kind)?;
        Ok(self.divide(other.amount)?.amount)
    }

    /// Fail with `KindMismatch` unless this measurement has the given kind
    pub fn expect_kind(&self, kind: Kind) -> MixResult<()> {
        if self.kind != kind {
            return Err(MixError::KindMismatch {
                expected: kind,
                found: self.kind,
            });
        }
        Ok(())
    }

    /// Value and label of the most readable display unit
    pub fn display_unit(&self) -> (f64, &'static str) {
        select_display_unit(self.kind, self.amount)
    }
}

impl Mul<f64> for Measurement {
    type Output = Measurement;

    fn mul(self, scalar: f64) -> Measurement {
        self.scale(scalar)
    }
}

impl Mul<Measurement> for f64 {
    type Output = Measurement;

    fn mul(self, unit: Measurement) -> Measurement {
        unit.scale(self)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, label) = self.display_unit();
        write!(f, "{:.2} {}", value, label)
    }
}
