//! Temperature scales
//!
//! Temperature is the one quantity that cannot live in a scale table: the
//! scales have different zero points, so every conversion goes through
//! Kelvin with an affine formula.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset between the Celsius and Kelvin zero points
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit freezing point of water
const FAHRENHEIT_FREEZING: f64 = 32.0;

/// A supported temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All scales, in listing order
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Resolve a unit name. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(unit: &str) -> Option<TemperatureUnit> {
        match unit.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" | "kelvins" | "°k" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    /// Short symbol shown in unit listings
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Every accepted spelling, lowercase
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["c", "celsius", "°c"],
            TemperatureUnit::Fahrenheit => &["f", "fahrenheit", "°f"],
            TemperatureUnit::Kelvin => &["k", "kelvin", "kelvins", "°k"],
        }
    }

    /// Convert a reading on this scale to Kelvin
    pub fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => {
                (value - FAHRENHEIT_FREEZING) * 5.0 / 9.0 + KELVIN_OFFSET
            }
            TemperatureUnit::Kelvin => value,
        }
    }

    /// Convert a Kelvin reading to this scale
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => {
                (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_FREEZING
            }
            TemperatureUnit::Kelvin => kelvin,
        }
    }

    /// Convert a reading on this scale to another scale
    pub fn convert_to(self, value: f64, target: TemperatureUnit) -> f64 {
        target.from_kelvin(self.to_kelvin(value))
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(TemperatureUnit::parse("c"), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse(" Celsius "), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("°C"), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("FAHRENHEIT"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse("°f"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse("kelvins"), Some(TemperatureUnit::Kelvin));
        assert_eq!(TemperatureUnit::parse("°K"), Some(TemperatureUnit::Kelvin));
    }

    #[test]
    fn test_parse_rejects_other_scales() {
        assert_eq!(TemperatureUnit::parse("rankine"), None);
        assert_eq!(TemperatureUnit::parse("r"), None);
        assert_eq!(TemperatureUnit::parse(""), None);
    }

    #[test]
    fn test_every_alias_parses_back() {
        for unit in TemperatureUnit::ALL {
            for alias in unit.aliases() {
                assert_eq!(TemperatureUnit::parse(alias), Some(unit));
            }
            assert_eq!(TemperatureUnit::parse(unit.symbol()), Some(unit));
        }
    }

    #[test]
    fn test_to_kelvin() {
        assert_eq!(TemperatureUnit::Celsius.to_kelvin(0.0), 273.15);
        assert_eq!(TemperatureUnit::Kelvin.to_kelvin(300.0), 300.0);
        assert_relative_eq!(TemperatureUnit::Fahrenheit.to_kelvin(32.0), 273.15);
        assert_relative_eq!(TemperatureUnit::Fahrenheit.to_kelvin(212.0), 373.15);
    }

    #[test]
    fn test_from_kelvin() {
        assert_eq!(TemperatureUnit::Celsius.from_kelvin(273.15), 0.0);
        assert_eq!(TemperatureUnit::Fahrenheit.from_kelvin(273.15), 32.0);
        assert_eq!(TemperatureUnit::Kelvin.from_kelvin(0.0), 0.0);
    }

    #[test]
    fn test_freezing_and_boiling_points() {
        assert_eq!(TemperatureUnit::Celsius.convert_to(0.0, TemperatureUnit::Fahrenheit), 32.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert_to(212.0, TemperatureUnit::Celsius), 100.0);
    }

    #[test]
    fn test_minus_forty_meets() {
        assert_relative_eq!(
            TemperatureUnit::Celsius.convert_to(-40.0, TemperatureUnit::Fahrenheit),
            -40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_absolute_zero() {
        assert_relative_eq!(
            TemperatureUnit::Kelvin.convert_to(0.0, TemperatureUnit::Celsius),
            -273.15
        );
        assert_relative_eq!(
            TemperatureUnit::Kelvin.convert_to(0.0, TemperatureUnit::Fahrenheit),
            -459.67,
            epsilon = 1e-9
        );
    }
}
