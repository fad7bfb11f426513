//! Mixture report
//!
//! The rendered view of a mixture: serving size, per-ingredient masses and
//! aggregate nutrition. Printable as text or serializable as JSON.

use std::fmt;

use serde::Serialize;

use crate::error::MixResult;
use crate::nutrition::{Kind, Measurement};

use super::MeasurementTable;

/// Column width for ingredient names
const INGREDIENT_WIDTH: usize = 17;
/// Column width for nutrient names
const NUTRIENT_WIDTH: usize = 16;

/// A measurement with its human-readable rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedMeasurement {
    pub kind: Kind,
    /// Amount in the kind's canonical unit
    pub amount: f64,
    pub display: String,
}

impl From<&Measurement> for FormattedMeasurement {
    fn from(m: &Measurement) -> Self {
        Self {
            kind: m.kind,
            amount: m.amount,
            display: m.to_string(),
        }
    }
}

/// One named row of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    #[serde(flatten)]
    pub value: FormattedMeasurement,
}

/// Complete mixture report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixtureReport {
    pub serving: FormattedMeasurement,
    pub ingredients: Vec<ReportLine>,
    pub nutrition: Vec<ReportLine>,
}

impl MixtureReport {
    pub fn new(
        serving: &Measurement,
        amounts: &MeasurementTable,
        nutrition: &MeasurementTable,
    ) -> Self {
        Self {
            serving: serving.into(),
            ingredients: lines(amounts),
            nutrition: lines(nutrition),
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> MixResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn lines(table: &MeasurementTable) -> Vec<ReportLine> {
    table
        .iter()
        .map(|(name, value)| ReportLine {
            name: name.to_string(),
            value: value.into(),
        })
        .collect()
}

impl fmt::Display for MixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Serving Size: {}", self.serving.display)?;
        for line in &self.ingredients {
            writeln!(
                f,
                "  {:<width$}{}",
                line.name,
                line.value.display,
                width = INGREDIENT_WIDTH
            )?;
        }

        writeln!(f)?;
        writeln!(f, "NUTRITION")?;
        for line in &self.nutrition {
            writeln!(
                f,
                "  {:<width$}{}",
                line.name,
                line.value.display,
                width = NUTRIENT_WIDTH
            )?;
        }
        Ok(())
    }
}
