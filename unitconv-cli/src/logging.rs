//! Logging setup
//!
//! Logs go to stderr so stdout carries only conversion output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive (e.g. `debug`,
/// `unitconv_units=trace`). Overrides `--verbose`.
pub const LOG_ENV: &str = "UNITCONV_LOG";

/// Filter used when `UNITCONV_LOG` is unset or invalid
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }
}
