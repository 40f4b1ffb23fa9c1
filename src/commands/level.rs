//! Implementation of the `huggle-parse level` command.

use super::{load_optional_site, read_source};
use crate::cli::LevelArgs;
use chrono::{NaiveDate, Utc};
use huggle_parser::config::{ProjectConfiguration, WikiSite};
use huggle_parser::error::Result;
use huggle_parser::talk::{get_level, scan_events};

/// Execute the `huggle-parse level` command.
///
/// Prints the warning level of the talk page, optionally preceded by every
/// warning found on it.
pub fn cmd_level(args: LevelArgs) -> Result<()> {
    let site = load_optional_site(args.config.as_deref())?;
    let page = read_source(&args.page)?;
    let cutoff = args
        .cutoff
        .unwrap_or_else(|| default_cutoff(site.as_ref(), Utc::now().date_naive()));

    if args.events {
        for event in scan_events(&page, site.as_ref()) {
            let date = event
                .date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "undated".to_string());
            println!("{}\t{}\t{}", event.level, date, event.template);
        }
    }
    println!("{}", get_level(&page, cutoff, site.as_ref()));
    Ok(())
}

/// Cutoff derived from the site's template age, or the default age.
pub(crate) fn default_cutoff(site: Option<&WikiSite>, today: NaiveDate) -> NaiveDate {
    match site {
        Some(site) => site.project.warning_cutoff(today),
        None => ProjectConfiguration::default().warning_cutoff(today),
    }
}
