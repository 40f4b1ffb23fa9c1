//! Localized month names.

use crate::config::WikiSite;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::warn;

/// Returned by [`month_index`] for a name no month answers to.
pub const MONTH_NOT_FOUND: i8 = -1;

const ENGLISH: [[&str; 2]; 12] = [
    ["January", "Jan"],
    ["February", "Feb"],
    ["March", "Mar"],
    ["April", "Apr"],
    ["May", "May"],
    ["June", "Jun"],
    ["July", "Jul"],
    ["August", "Aug"],
    ["September", "Sep"],
    ["October", "Oct"],
    ["November", "Nov"],
    ["December", "Dec"],
];

static ENGLISH_TABLE: LazyLock<MonthTable> = LazyLock::new(MonthTable::english);

/// Month names of a wiki, one slot per calendar month.
///
/// Each slot may hold several spellings (full name, abbreviation, genitive
/// form, ...). Slot `i` answers to month number `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthTable {
    months: Vec<Vec<String>>,
}

impl MonthTable {
    /// Build a table from per-month spellings.
    ///
    /// Only the first twelve slots are used. Blank spellings are dropped.
    pub fn new(months: Vec<Vec<String>>) -> Self {
        if !months.is_empty() && months.len() != 12 {
            warn!(count = months.len(), "month table does not have 12 entries");
        }
        let months = months
            .into_iter()
            .take(12)
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .collect();
        Self { months }
    }

    /// Build a table with a single spelling per month.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(|name| vec![name.into()]).collect())
    }

    /// English month names and their three-letter abbreviations.
    pub fn english() -> Self {
        Self::new(
            ENGLISH
                .iter()
                .map(|names| names.iter().map(|name| name.to_string()).collect())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[Vec<String>] {
        &self.months
    }

    /// 1-based month number for `name`, compared case-insensitively.
    pub fn index_of(&self, name: &str) -> Option<u8> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        self.months
            .iter()
            .position(|spellings| spellings.iter().any(|s| s.to_lowercase() == name))
            .and_then(|index| u8::try_from(index + 1).ok())
    }
}

/// The table used for `site`: its own when configured, English otherwise.
pub(crate) fn effective_table(site: Option<&WikiSite>) -> &MonthTable {
    match site {
        Some(site) if !site.months.is_empty() => &site.months,
        _ => &*ENGLISH_TABLE,
    }
}

/// Month number (1 to 12) of a localized month name.
///
/// # Returns
///
/// The 1-based month number, or [`MONTH_NOT_FOUND`] if no month of the
/// site's table (or the built-in English table) has this name.
pub fn month_index(name: &str, site: Option<&WikiSite>) -> i8 {
    effective_table(site)
        .index_of(name)
        .and_then(|index| i8::try_from(index).ok())
        .unwrap_or(MONTH_NOT_FOUND)
}
