//! Talk page warning level detection.
//!
//! Users who vandalise receive escalating warning templates on their talk
//! page, level 1 (a gentle note) to level 4 (final warning). Before warning
//! again the client needs the current level, which is the highest level
//! among the warnings that are still recent.
//!
//! Every warning template leaves an HTML comment marker in the page, and
//! every warning is signed with a timestamp such as
//! `12:34, 5 March 2014 (UTC)`. The page is cut into sections at `==`
//! headings. A section is dated by its newest signature, and every marker
//! found in the section yields a [`TalkPageEvent`] carrying that date.
//!
//! When the site trims old warnings (the default), events dated before the
//! cutoff are stale and events without a readable date do not count either.
//! When trimming is off every event counts.

mod months;
mod scanner;
mod templates;


pub use months::{MONTH_NOT_FOUND, MonthTable, month_index};
pub use scanner::{TalkPageEvent, get_level, scan_events};
pub use templates::{WarningTemplate, default_templates};
