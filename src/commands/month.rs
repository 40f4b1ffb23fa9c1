//! Implementation of the `huggle-parse month` command.

use super::load_optional_site;
use crate::cli::MonthArgs;
use huggle_parser::error::{ParserError, Result};
use huggle_parser::talk::month_index;

/// Execute the `huggle-parse month` command.
///
/// Prints the month number, or fails when the name is unknown.
pub fn cmd_month(args: MonthArgs) -> Result<()> {
    let site = load_optional_site(args.config.as_deref())?;
    let index = month_index(&args.name, site.as_ref());
    if index < 0 {
        return Err(ParserError::UserError(format!(
            "'{}' is not a known month name",
            args.name
        )));
    }
    println!("{index}");
    Ok(())
}
