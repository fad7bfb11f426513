//! Insertion-ordered measurement table
//!
//! Maps names (ingredients or nutrients) to measurements while keeping the
//! order in which names were first seen, so reports are reproducible.

use crate::error::MixResult;
use crate::nutrition::Measurement;

/// Name to measurement table, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    entries: Vec<(String, Measurement)>,
}

impl MeasurementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert a new entry, returning false if the name is already present
    pub fn insert(&mut self, name: &str, value: Measurement) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push((name.to_string(), value));
        true
    }

    /// Add `value` to the running total for `name`, starting it on first use
    pub fn accumulate(&mut self, name: &str, value: Measurement) -> MixResult<()> {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, total)) => *total = total.checked_add(&value)?,
            None => self.entries.push((name.to_string(), value)),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
