//! unitconv - convert values between units of measure
//!
//! With four positional arguments, converts once and prints the bare result:
//!
//! ```text
//! unitconv length 10 m ft
//! 32.808398950131235
//! ```
//!
//! Without arguments, starts an interactive prompt loop.

mod logging;
mod oneshot;
mod repl;
mod values;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::{self, ExitCode};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "unitconv",
    version,
    about = "Convert values between units of measure",
    allow_negative_numbers = true
)]
struct Cli {
    /// Quantity, e.g. length, mass, temperature
    quantity: Option<String>,

    /// Value to convert, e.g. 10, -40, -.5, -inf
    #[arg(allow_hyphen_values = true)]
    value: Option<String>,

    /// Unit to convert from
    from_unit: Option<String>,

    /// Unit to convert to
    to_unit: Option<String>,

    #[arg(hide = true)]
    rest: Vec<String>,

    /// Print results and errors as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// List supported quantities and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// List the units of a quantity and exit
    #[arg(long, short = 'u', value_name = "QUANTITY")]
    units: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    /// Positional arguments in order, stopping at the first missing one
    fn positionals(&self) -> Vec<String> {
        [&self.quantity, &self.value, &self.from_unit, &self.to_unit]
            .into_iter()
            .map_while(Clone::clone)
            .chain(self.rest.iter().cloned())
            .collect()
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(?cli, "starting");

    let positionals = cli.positionals();
    if positionals.is_empty() && !cli.list && cli.units.is_none() {
        return interactive();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        return Ok(oneshot::quantities(cli.json, &mut out)?.into());
    }
    if let Some(quantity) = &cli.units {
        return Ok(oneshot::units(quantity, cli.json, &mut out)?.into());
    }

    let outcome = oneshot::run(&positionals, cli.json, &mut out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(outcome.into())
}

/// Prompt loop on stdin. Ctrl-C ends it with the same closing line as end
/// of input; stdout stays unlocked between writes so the handler can print.
fn interactive() -> Result<ExitCode> {
    ctrlc::set_handler(|| {
        debug!("interrupted");
        let _ = repl::farewell(&mut io::stdout());
        process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    let stdin = io::stdin();
    let mut session = repl::Session::new(stdin.lock(), io::stdout());
    session.run().context("interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_conversion() {
        let cli = Cli::try_parse_from(["unitconv", "length", "10", "m", "ft"]).unwrap();
        assert_eq!(cli.positionals(), vec!["length", "10", "m", "ft"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_negative_value() {
        let cli = Cli::try_parse_from(["unitconv", "temperature", "-40", "c", "f"]).unwrap();
        assert_eq!(cli.value.as_deref(), Some("-40"));
    }

    #[test]
    fn test_parse_hyphenated_float_values() {
        for value in ["-.5", "-inf", "-infinity", "-nan", "-1e3"] {
            let cli = Cli::try_parse_from(["unitconv", "length", value, "m", "ft"]).unwrap();
            assert_eq!(cli.positionals(), vec!["length", value, "m", "ft"]);
        }
    }

    #[test]
    fn test_hyphenated_value_reaches_conversion() {
        let cli = Cli::try_parse_from(["unitconv", "length", "-.5", "m", "ft"]).unwrap();
        let mut out = Vec::new();
        let outcome = oneshot::run(&cli.positionals(), cli.json, &mut out).unwrap();
        assert_eq!(outcome, oneshot::Outcome::Success);
        assert_eq!(String::from_utf8(out).unwrap(), "-1.6404199475065615\n");

        let cli = Cli::try_parse_from(["unitconv", "temperature", "-inf", "c", "k"]).unwrap();
        let mut out = Vec::new();
        let outcome = oneshot::run(&cli.positionals(), cli.json, &mut out).unwrap();
        assert_eq!(outcome, oneshot::Outcome::Success);
        assert_eq!(String::from_utf8(out).unwrap(), "-inf\n");
    }

    #[test]
    fn test_flags_after_conversion() {
        let cli = Cli::try_parse_from(["unitconv", "length", "10", "m", "ft", "-j"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.positionals().len(), 4);
    }

    #[test]
    fn test_parse_partial_and_extra() {
        let cli = Cli::try_parse_from(["unitconv", "length", "10"]).unwrap();
        assert_eq!(cli.positionals().len(), 2);

        let cli = Cli::try_parse_from(["unitconv", "data", "1", "mb", "kb", "x"]).unwrap();
        assert_eq!(cli.positionals().len(), 5);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["unitconv", "--json", "-u", "mass"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.units.as_deref(), Some("mass"));
        assert!(cli.positionals().is_empty());

        let cli = Cli::try_parse_from(["unitconv", "-l", "-v"]).unwrap();
        assert!(cli.list);
        assert!(cli.verbose);
    }
}
