//! Interactive prompt loop
//!
//! Asks for a quantity, shows its units, then asks for a value and two
//! units and prints the conversion. Lookup and conversion errors are shown
//! and the loop continues; it ends on an empty line, a quit word, or end of
//! input.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use unitconv_units::{convert, list_quantities, list_units};

use crate::values::{format_value, parse_value};

const QUIT_WORDS: [&str; 3] = ["quit", "q", "exit"];

/// True if a quantity answer should end the session
pub fn is_quit(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty()
        || QUIT_WORDS
            .iter()
            .any(|word| answer.eq_ignore_ascii_case(word))
}

/// One interactive session over a line reader and a writer
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.banner()?;
        let mut conversions = 0usize;

        loop {
            let Some(quantity) = self.prompt("\nQuantity (or 'quit'): ")? else {
                return self.exit();
            };
            if is_quit(&quantity) {
                info!(conversions, "session ended");
                return Ok(());
            }

            match list_units(&quantity) {
                Ok(units) => writeln!(self.output, "Available units: {}", units.join(", "))?,
                Err(err) => {
                    writeln!(self.output, "Error: {}", err)?;
                    continue;
                }
            }

            let Some(raw_value) = self.prompt("Value: ")? else {
                return self.exit();
            };
            let value = match parse_value(&raw_value) {
                Ok(value) => value,
                Err(err) => {
                    writeln!(self.output, "Conversion error: {}", err)?;
                    continue;
                }
            };
            let Some(from_unit) = self.prompt("From unit: ")? else {
                return self.exit();
            };
            let Some(to_unit) = self.prompt("To unit: ")? else {
                return self.exit();
            };

            match convert(&quantity, value, &from_unit, &to_unit) {
                Ok(result) => {
                    conversions += 1;
                    writeln!(
                        self.output,
                        "{} {} = {} {}",
                        format_value(value),
                        from_unit,
                        format_value(result),
                        to_unit
                    )?;
                }
                Err(err) => writeln!(self.output, "Conversion error: {}", err)?,
            }
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "UnitConverter CLI. Supported quantities:")?;
        for quantity in list_quantities() {
            writeln!(self.output, " - {}", quantity)?;
        }
        Ok(())
    }

    /// Show `label` and read one trimmed line; None at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn exit(&mut self) -> io::Result<()> {
        debug!("end of input");
        farewell(&mut self.output)
    }
}

/// Closing line printed when the session ends on end of input or Ctrl-C
pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nExiting.")?;
    out.flush()
}
