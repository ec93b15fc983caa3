//! Conversion engine
//!
//! The three operations callers use: list quantities, list the units of a
//! quantity, and convert a value between two units of the same quantity.
//! Generic quantities go through their base unit, so supporting a new alias
//! only needs one table entry.

use tracing::debug;
use unitconv_core::{ConvertError, Direction, Lookup};

use crate::quantity::{QuantityKind, TEMPERATURE};
use crate::table::{UnitTable, UNITS};
use crate::temperature::TemperatureUnit;

/// All supported quantity names, including temperature, in lexicographic order
pub fn list_quantities() -> Vec<&'static str> {
    let mut quantities: Vec<&'static str> = UNITS.quantities().collect();
    quantities.push(TEMPERATURE);
    quantities.sort_unstable();
    quantities
}

/// Unit aliases accepted for a quantity.
///
/// Temperature lists its scale symbols `C`, `F`, `K`. Other quantities list
/// every alias, deduplicated and sorted.
pub fn list_units(quantity: &str) -> Result<Vec<&'static str>, ConvertError> {
    match QuantityKind::resolve(quantity) {
        Some(QuantityKind::Temperature) => Ok(TemperatureUnit::ALL
            .iter()
            .map(|unit| unit.symbol())
            .collect()),
        Some(QuantityKind::Generic(table)) => Ok(table.aliases().collect()),
        None => {
            debug!(quantity, "unit listing for unknown quantity");
            Err(ConvertError::unknown_quantity(quantity, Lookup::Listing))
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `quantity`.
///
/// Names are matched case-insensitively after trimming. Errors carry the
/// input exactly as given.
pub fn convert(
    quantity: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    let kind = QuantityKind::resolve(quantity)
        .ok_or_else(|| ConvertError::unknown_quantity(quantity, Lookup::Conversion))?;

    let result = match kind {
        QuantityKind::Temperature => convert_temperature(value, from_unit, to_unit)?,
        QuantityKind::Generic(table) => convert_scaled(table, quantity, value, from_unit, to_unit)?,
    };

    debug!(
        quantity = kind.name(),
        value,
        from_unit,
        to_unit,
        result,
        "converted"
    );
    Ok(result)
}

fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    let from = TemperatureUnit::parse(from_unit)
        .ok_or_else(|| ConvertError::unsupported_temperature_unit(from_unit, Direction::From))?;
    let kelvin = from.to_kelvin(value);

    let to = TemperatureUnit::parse(to_unit)
        .ok_or_else(|| ConvertError::unsupported_temperature_unit(to_unit, Direction::To))?;
    Ok(to.from_kelvin(kelvin))
}

fn convert_scaled(
    table: &UnitTable,
    quantity: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConvertError> {
    let from_scale = table
        .scale(from_unit)
        .ok_or_else(|| ConvertError::unknown_unit(quantity, from_unit, Direction::From))?;
    let to_scale = table
        .scale(to_unit)
        .ok_or_else(|| ConvertError::unknown_unit(quantity, to_unit, Direction::To))?;

    let base_value = value * from_scale;
    Ok(base_value / to_scale)
}
