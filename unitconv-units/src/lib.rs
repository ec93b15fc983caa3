//! unitconv Units - Scale tables and conversion engine
//!
//! Converts values between units of the same physical quantity. Every
//! quantity except temperature is a table of scale factors relative to a
//! base unit; temperature converts through Kelvin with affine formulas.
//!
//! Quantities:
//! - Length (m, km, ft, mi, etc.)
//! - Mass (kg, g, lb, oz, etc.)
//! - Time (s, min, h, day)
//! - Temperature (C, F, K)
//! - Area, Volume, Speed
//! - Pressure, Energy, Power, Force
//! - Data (bit, byte, kb, mb, etc.)
//! - Angle, Frequency
//! - Electrical (current, voltage, resistance, capacitance, inductance)
//! - Light (luminous flux, luminous intensity, illuminance)
//! - Amount, Concentration, Magnetic flux density
//!
//! ```
//! use unitconv_units::{convert, list_units};
//!
//! let feet = convert("length", 10.0, "m", "ft").unwrap();
//! assert!((feet - 32.8084).abs() < 1e-4);
//! assert_eq!(list_units("temperature").unwrap(), vec!["C", "F", "K"]);
//! ```

mod convert;
mod quantity;
mod table;
mod temperature;

pub use convert::{convert, list_quantities, list_units};
pub use quantity::{QuantityKind, TEMPERATURE};
pub use table::{UnitRegistry, UnitTable, UNITS};
pub use temperature::{TemperatureUnit, KELVIN_OFFSET};
pub use unitconv_core::{ConvertError, Direction, ErrorReport, Lookup};
