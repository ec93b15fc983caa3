//! Reading values from and writing values to the terminal

use unitconv_units::{list_quantities, list_units, ConvertError, ErrorReport};

/// Parse a user-supplied number, surrounding whitespace ignored
pub fn parse_value(input: &str) -> Result<f64, ConvertError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::invalid_value(input.trim()))
}

/// Render a float the way a reader expects to see it typed back in:
/// integral values keep a trailing `.0`, exponents carry a sign and at
/// least two digits (`1e-07`, `1e+16`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let debug = format!("{:?}", value);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}

/// Build an error report with a hint listing what would have been accepted
pub fn report(err: &ConvertError) -> ErrorReport {
    let base = ErrorReport::from(err);
    match err {
        ConvertError::UnknownQuantity { .. } => base.with_suggestion(format!(
            "Supported quantities: {}",
            list_quantities().join(", ")
        )),
        ConvertError::UnknownUnit { quantity, .. } => match list_units(quantity) {
            Ok(units) => base.with_suggestion(format!("Available units: {}", units.join(", "))),
            Err(_) => base,
        },
        ConvertError::UnsupportedTemperatureUnit { .. } => match list_units("temperature") {
            Ok(units) => base.with_suggestion(format!(
                "Available units: {} (or celsius, fahrenheit, kelvin)",
                units.join(", ")
            )),
            Err(_) => base,
        },
        ConvertError::InvalidValue { .. } => {
            base.with_suggestion("Use a plain number such as 10, -3.5 or 1e3")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::{convert, Direction, Lookup};

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("10").unwrap(), 10.0);
        assert_eq!(parse_value(" -3.5 ").unwrap(), -3.5);
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
        assert_eq!(parse_value("+2").unwrap(), 2.0);
        assert!(parse_value("inf").unwrap().is_infinite());
    }

    #[test]
    fn test_parse_value_rejects_text() {
        let err = parse_value(" ten ").unwrap_err();
        assert_eq!(err, ConvertError::invalid_value("ten"));
        assert!(parse_value("").is_err());
        assert!(parse_value("10 m").is_err());
    }

    #[test]
    fn test_format_integral_values() {
        assert_eq!(format_value(32.0), "32.0");
        assert_eq!(format_value(1024.0), "1024.0");
        assert_eq!(format_value(-40.0), "-40.0");
        assert_eq!(format_value(0.0), "0.0");
    }

    #[test]
    fn test_format_fractional_values() {
        assert_eq!(format_value(32.808398950131235), "32.808398950131235");
        assert_eq!(format_value(0.1), "0.1");
    }

    #[test]
    fn test_format_exponents() {
        assert_eq!(format_value(1e-7), "1e-07");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(1.5e-19), "1.5e-19");
        assert_eq!(format_value(2.5e100), "2.5e+100");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_value(f64::NAN), "nan");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_conversion_result() {
        let result = convert("length", 10.0, "m", "ft").unwrap();
        assert_eq!(format_value(result), "32.808398950131235");
    }

    #[test]
    fn test_report_suggests_quantities() {
        let err = ConvertError::unknown_quantity("bogus", Lookup::Conversion);
        let suggestion = report(&err).suggestion.unwrap();
        assert!(suggestion.starts_with("Supported quantities: "));
        assert!(suggestion.contains("temperature"));
    }

    #[test]
    fn test_report_suggests_units() {
        let err = ConvertError::unknown_unit("length", "furlong", Direction::From);
        let unit_report = report(&err);
        assert_eq!(unit_report.code, "UNKNOWN_UNIT");
        assert!(unit_report.suggestion.unwrap().contains("meter"));

        let err = ConvertError::unsupported_temperature_unit("r", Direction::To);
        let suggestion = report(&err).suggestion.unwrap();
        assert!(suggestion.starts_with("Available units: C, F, K"));
    }
}
