use crate::error::{Result, StockError};
use std::fmt;

/// One inventory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    pub origin: String,
    pub code: String,
    pub name: String,
    pub unit_cost: f64,
    pub quantity: u64,
}

impl Shoe {
    pub fn new(
        origin: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        unit_cost: f64,
        quantity: u64,
    ) -> Self {
        Self {
            origin: origin.into(),
            code: code.into(),
            name: name.into(),
            unit_cost,
            quantity,
        }
    }

    /// Builds a shoe from raw user text, coercing the numeric fields.
    ///
    /// Fails with [`StockError::InvalidInput`] naming the first field that
    /// does not coerce. Nothing is zeroed or clamped.
    pub fn from_fields(
        origin: &str,
        code: &str,
        name: &str,
        unit_cost: &str,
        quantity: &str,
    ) -> Result<Self> {
        let unit_cost = parse_cost(unit_cost).ok_or_else(|| {
            StockError::InvalidInput(format!(
                "cost '{}' is not a non-negative number",
                unit_cost.trim()
            ))
        })?;
        let quantity = parse_quantity(quantity).ok_or_else(|| {
            StockError::InvalidInput(format!(
                "quantity '{}' is not a non-negative whole number",
                quantity.trim()
            ))
        })?;
        Ok(Self::new(origin, code, name, unit_cost, quantity))
    }

    pub fn total_value(&self) -> f64 {
        self.unit_cost * self.quantity as f64
    }

    /// Case-insensitive code comparison.
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }

    pub fn field_value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::Quantity => self.quantity as f64,
            NumericField::UnitCost => self.unit_cost,
            NumericField::TotalValue => self.total_value(),
        }
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) from {}: {} at {:.2}",
            self.name, self.code, self.origin, self.quantity, self.unit_cost
        )
    }
}

pub(crate) fn parse_cost(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

pub(crate) fn parse_quantity(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

/// Stable handle to a record inside a [`crate::store::RecordStore`].
///
/// Handles are positions in insertion order. The store never removes
/// records, so a handle stays valid for the life of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Quantity,
    UnitCost,
    TotalValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

impl Direction {
    /// True when `candidate` strictly beats `current`. Ties keep the earlier record.
    pub(crate) fn prefers(&self, candidate: f64, current: f64) -> bool {
        match self {
            Direction::Min => candidate < current,
            Direction::Max => candidate > current,
        }
    }
}
