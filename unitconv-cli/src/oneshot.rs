//! One-shot invocation: convert once from command-line arguments and exit

use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, warn};
use unitconv_units::{convert, list_quantities, list_units, ConvertError};

use crate::values::{format_value, parse_value, report};

pub const USAGE: &str = "Usage: unitconv [quantity value from_unit to_unit]";
pub const EXAMPLE: &str = "Example: unitconv length 10 m ft";

/// How a one-shot run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
    Usage,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
            Outcome::Usage => ExitCode::from(2),
        }
    }
}

/// A successful conversion, as printed with `--json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion<'a> {
    pub quantity: &'a str,
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
    pub result: f64,
}

/// Convert `[quantity, value, from_unit, to_unit]` and print the result.
///
/// Fewer than four arguments prints usage without converting. Arguments
/// past the fourth are ignored.
pub fn run<W: Write>(args: &[String], json: bool, out: &mut W) -> io::Result<Outcome> {
    let [quantity, value, from_unit, to_unit, rest @ ..] = args else {
        debug!(given = args.len(), "too few arguments for a conversion");
        writeln!(out, "{}", USAGE)?;
        writeln!(out, "{}", EXAMPLE)?;
        return Ok(Outcome::Usage);
    };
    if !rest.is_empty() {
        warn!(ignored = ?rest, "ignoring extra arguments");
    }

    let converted = parse_value(value).and_then(|value| {
        convert(quantity, value, from_unit, to_unit).map(|result| Conversion {
            quantity,
            value,
            from_unit,
            to_unit,
            result,
        })
    });

    match converted {
        Ok(conversion) if json => {
            writeln!(out, "{}", to_json(&conversion)?)?;
            Ok(Outcome::Success)
        }
        Ok(conversion) => {
            writeln!(out, "{}", format_value(conversion.result))?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            write_error(&err, json, out)?;
            if !json {
                writeln!(out, "{}", USAGE)?;
            }
            Ok(Outcome::Failed)
        }
    }
}

/// Print the supported quantities, one per line
pub fn quantities<W: Write>(json: bool, out: &mut W) -> io::Result<Outcome> {
    let quantities = list_quantities();
    if json {
        writeln!(out, "{}", to_json(&quantities)?)?;
    } else {
        for quantity in quantities {
            writeln!(out, "{}", quantity)?;
        }
    }
    Ok(Outcome::Success)
}

/// Print the units of one quantity
pub fn units<W: Write>(quantity: &str, json: bool, out: &mut W) -> io::Result<Outcome> {
    match list_units(quantity) {
        Ok(units) if json => {
            writeln!(out, "{}", to_json(&units)?)?;
            Ok(Outcome::Success)
        }
        Ok(units) => {
            writeln!(out, "Available units: {}", units.join(", "))?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            write_error(&err, json, out)?;
            Ok(Outcome::Failed)
        }
    }
}

fn write_error<W: Write>(err: &ConvertError, json: bool, out: &mut W) -> io::Result<()> {
    debug!(code = err.code(), "conversion failed");
    if json {
        writeln!(out, "{}", to_json(&report(err))?)
    } else {
        writeln!(out, "Error: {}", err)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::other)
}
