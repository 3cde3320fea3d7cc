use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use calculator::interpreter::evaluator::core::Evaluator;
use clap::{Parser, ValueEnum};
use env_logger::Target;
use log::{LevelFilter, error};

/// Printed instead of a result when evaluation fails.
const FAILURE_MESSAGE: &str =
    "Could not calculate result due to previous error -- see error logs for details";

/// Log verbosity accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Info,
    Error,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => Self::Info,
            LogLevel::Error => Self::Error,
            LogLevel::Debug => Self::Debug,
        }
    }
}

/// calculator evaluates expressions such as `add(2, mult(3, 5))` or
/// `let(a, 5, add(a, a))` using arbitrary-precision decimals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate.
    #[arg(short, long)]
    expression: String,

    /// Log level.
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    loglevel: LogLevel,

    /// Log file. Created if it doesn't exist, otherwise appended to. Logs go
    /// to stderr when omitted.
    #[arg(short = 'f', long)]
    logfile: Option<PathBuf>,
}

/// Chooses where log records go: an append-mode file, or stderr.
fn log_target(logfile: Option<&Path>) -> Target {
    let Some(path) = logfile else {
        return Target::Stderr;
    };

    let file = OpenOptions::new().create(true)
                                 .append(true)
                                 .open(path)
                                 .unwrap_or_else(|e| {
                                     eprintln!("Failed to open the log file '{}': {e}",
                                               path.display());
                                     std::process::exit(1);
                                 });
    Target::Pipe(Box::new(file))
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(args.loglevel.into())
                              .target(log_target(args.logfile.as_deref()))
                              .init();

    let result = Evaluator::new().evaluate(&args.expression).unwrap_or_else(|e| {
                                                                  error!("{e}");
                                                                  FAILURE_MESSAGE.to_string()
                                                              });
    println!("{result}");
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn short_parameters() {
        let args = Args::try_parse_from(["calculator", "-l", "ERROR", "-e", "add(2,2)"]).unwrap();
        assert_eq!(args.expression, "add(2,2)");
        assert_eq!(args.loglevel, LogLevel::Error);
        assert!(args.logfile.is_none());
    }

    #[test]
    fn long_parameters() {
        let args = Args::try_parse_from(["calculator",
                                         "--loglevel",
                                         "debug",
                                         "--expression",
                                         "div(10,2)",
                                         "--logfile",
                                         "calc.log"]).unwrap();
        assert_eq!(args.expression, "div(10,2)");
        assert_eq!(args.loglevel, LogLevel::Debug);
        assert_eq!(args.logfile, Some(PathBuf::from("calc.log")));
    }

    #[test]
    fn log_level_defaults_to_info() {
        let args = Args::try_parse_from(["calculator", "-e", "add(1,1)"]).unwrap();
        assert_eq!(args.loglevel, LogLevel::Info);
        assert_eq!(LevelFilter::from(args.loglevel), LevelFilter::Info);
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let err = Args::try_parse_from(["calculator", "-l", "ERR", "-e", "add(5,5)"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn missing_expression_is_rejected() {
        let err = Args::try_parse_from(["calculator", "-l", "ERROR"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn stderr_is_the_default_log_target() {
        assert!(matches!(log_target(None), Target::Stderr));
    }

    #[test]
    fn help_is_available() {
        let err = Args::try_parse_from(["calculator", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
