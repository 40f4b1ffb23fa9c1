//! huggle-parse: inspect Huggle configuration files from the command line.
//!
//! This is the main entry point for the `huggle-parse` CLI. It parses
//! arguments, sets up logging, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use huggle_parser::exit_codes;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` directives apply unless `-v` was given.
fn env_filter(verbose: u8, directives: Option<&str>) -> Option<EnvFilter> {
    if verbose > 0 {
        return None;
    }
    EnvFilter::try_new(directives?).ok()
}

fn init_logging(verbose: u8) {
    let directives = std::env::var("RUST_LOG").ok();
    let builder = FmtSubscriber::builder().with_writer(std::io::stderr);
    let result = match env_filter(verbose, directives.as_deref()) {
        Some(filter) => {
            tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
        }
        None => tracing::subscriber::set_global_default(
            builder.with_max_level(log_level(verbose)).finish(),
        ),
    };
    if let Err(err) = result {
        eprintln!("Warning: failed to install logger: {}", err);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::DEBUG);
        assert_eq!(log_level(5), Level::TRACE);
    }

    #[test]
    fn rust_log_applies_only_without_verbose_flags() {
        assert!(env_filter(0, Some("huggle_parser=debug")).is_some());
        assert!(env_filter(1, Some("huggle_parser=debug")).is_none());
        assert!(env_filter(0, None).is_none());
    }
}
