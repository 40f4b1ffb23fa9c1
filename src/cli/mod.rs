//! CLI argument parsing for huggle-parse.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The implementations live in the `commands` module.

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect Huggle configuration files.
///
/// Files ending in `.yaml` or `.yml` are read as YAML, anything else as the
/// legacy `key = value` format.
#[derive(Parser, Debug)]
#[command(name = "huggle-parse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log more (-v for debug, -vv for trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for huggle-parse.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a configuration file and summarize it.
    Config(ConfigArgs),

    /// Compute the warning level of a talk page.
    Level(LevelArgs),

    /// Look up the number of a localized month name.
    Month(MonthArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file to parse.
    pub file: PathBuf,

    /// Read the file as a user configuration instead of a project one.
    #[arg(long)]
    pub user: bool,

    /// Print the parsed configuration as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LevelArgs {
    /// File holding the wikitext of the talk page.
    pub page: PathBuf,

    /// Project configuration providing templates, months and trimming.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore warnings dated before this day (YYYY-MM-DD). Defaults to
    /// today minus the configured template age.
    #[arg(long)]
    pub cutoff: Option<NaiveDate>,

    /// List every warning found instead of only the level.
    #[arg(long)]
    pub events: bool,
}

#[derive(Args, Debug)]
pub struct MonthArgs {
    /// Month name to look up.
    pub name: String,

    /// Project configuration providing localized month names.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["huggle-parse", "config", "site.yaml", "--json"]).unwrap();
        assert_eq!(cli.verbose, 0);
        if let Command::Config(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("site.yaml"));
            assert!(args.json);
            assert!(!args.user);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn parse_level_with_cutoff() {
        let cli = Cli::try_parse_from([
            "huggle-parse",
            "level",
            "talk.txt",
            "--config",
            "site.txt",
            "--cutoff",
            "2014-02-20",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Command::Level(args) = cli.command {
            assert_eq!(args.page, PathBuf::from("talk.txt"));
            assert_eq!(args.config, Some(PathBuf::from("site.txt")));
            assert_eq!(args.cutoff, NaiveDate::from_ymd_opt(2014, 2, 20));
            assert!(!args.events);
        } else {
            panic!("Expected Level command");
        }
    }

    #[test]
    fn parse_level_rejects_bad_date() {
        let result = Cli::try_parse_from(["huggle-parse", "level", "t.txt", "--cutoff", "March"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_month() {
        let cli = Cli::try_parse_from(["huggle-parse", "month", "March"]).unwrap();
        if let Command::Month(args) = cli.command {
            assert_eq!(args.name, "March");
            assert!(args.config.is_none());
        } else {
            panic!("Expected Month command");
        }
    }
}
