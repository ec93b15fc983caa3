//! Resolved quantities

use std::fmt;

use crate::table::{normalize, UnitTable, UNITS};

/// Name of the quantity handled by affine conversion
pub const TEMPERATURE: &str = "temperature";

/// A quantity name resolved against the registry.
///
/// Generic quantities convert by pure scaling through their base unit;
/// temperature needs offsets and is handled separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityKind {
    Generic(&'static UnitTable),
    Temperature,
}

impl QuantityKind {
    /// Resolve a quantity name. Case-insensitive, whitespace trimmed.
    pub fn resolve(quantity: &str) -> Option<QuantityKind> {
        let key = normalize(quantity);
        if key == TEMPERATURE {
            return Some(QuantityKind::Temperature);
        }
        UNITS.get(&key).map(QuantityKind::Generic)
    }

    /// Canonical quantity name
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Generic(table) => table.quantity(),
            QuantityKind::Temperature => TEMPERATURE,
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, QuantityKind::Temperature)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
