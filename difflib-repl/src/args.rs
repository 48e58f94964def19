use clap::{Parser, ValueEnum};
use difflib::LogDomain;
use std::path::PathBuf;

/// Differentiate, simplify, and evaluate expressions.
///
/// Each line of input is an expression, optionally followed by values for its variables, such as
/// `x^2 * sin(x) ; x = 2`.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// The variable to differentiate with respect to.
    #[arg(long, default_value = "x")]
    pub var: String,

    /// Print the derivative as computed, without simplifying it.
    #[arg(long)]
    pub no_simplify: bool,

    /// Print the simplification steps applied to the derivative.
    #[arg(long, conflicts_with = "no_simplify")]
    pub steps: bool,

    /// What to do when a logarithm of a non-positive number is evaluated.
    #[arg(long, value_enum, default_value_t = LogDomainArg::Error)]
    pub log_domain: LogDomainArg,

    /// Set the log level. Overrides the `RUST_LOG` environment variable.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// A file to read expressions from, one per line. Without a file, expressions are read from
    /// stdin, interactively if it is a terminal.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDomainArg {
    /// Report an error.
    Error,

    /// Produce `NaN`.
    Nan,
}

impl From<LogDomainArg> for LogDomain {
    fn from(arg: LogDomainArg) -> Self {
        match arg {
            LogDomainArg::Error => LogDomain::Error,
            LogDomainArg::Nan => LogDomain::Nan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["difflib"]).unwrap();
        assert_eq!(cli.var, "x");
        assert!(!cli.no_simplify);
        assert!(!cli.steps);
        assert_eq!(cli.log_domain, LogDomainArg::Error);
        assert_eq!(cli.log_level, None);
        assert_eq!(cli.file, None);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "difflib", "--var", "t", "--steps", "--log-domain", "nan", "--log-level", "debug", "input.txt",
        ]).unwrap();
        assert_eq!(cli.var, "t");
        assert!(cli.steps);
        assert_eq!(LogDomain::from(cli.log_domain), LogDomain::Nan);
        assert_eq!(cli.log_level.map(log::LevelFilter::from), Some(log::LevelFilter::Debug));
        assert_eq!(cli.file, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn steps_need_simplification() {
        assert!(Cli::try_parse_from(["difflib", "--steps", "--no-simplify"]).is_err());
    }
}
