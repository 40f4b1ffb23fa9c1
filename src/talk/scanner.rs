//! Section splitting, signature dating and level computation.

use super::months::effective_table;
use super::templates::{WarningTemplate, default_templates};
use crate::config::WikiSite;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

/// `12:34, 5 March 2014 (UTC)`, tolerating a dot after the day or month.
///
/// Local wikis sign in their own zone (`CET`, `MESZ`, `UTC+1`); the zone is
/// not used for dating.
static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<hour>\d{1,2}):(?P<minute>\d{2}),\s*(?P<day>\d{1,2})\.?\s+(?P<month>\p{L}+)\.?\s+(?P<year>\d{4})\s*\((?P<zone>\p{L}{2,5}(?:[+-]\d{1,2})?)\)",
    )
    .expect("Invalid signature regex")
});

static DEFAULT_TEMPLATES: LazyLock<Vec<WarningTemplate>> = LazyLock::new(default_templates);

/// A warning found on a talk page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalkPageEvent {
    /// Marker of the template that was found.
    pub template: String,
    /// Date of the section it was found in, if the section is signed.
    pub date: Option<NaiveDate>,
    pub level: u8,
}

impl TalkPageEvent {
    /// Whether this warning still counts towards the user's level.
    pub fn qualifies(&self, cutoff: NaiveDate, trim_old_warnings: bool) -> bool {
        if !trim_old_warnings {
            return true;
        }
        self.date.is_some_and(|date| date >= cutoff)
    }
}

/// Split a page at lines starting with `==`.
///
/// Text before the first heading forms a section of its own.
pub(crate) fn split_sections(page: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in page.split_inclusive('\n') {
        if line.starts_with("==") && offset > start {
            sections.push(&page[start..offset]);
            start = offset;
        }
        offset += line.len();
    }
    if start < page.len() {
        sections.push(&page[start..]);
    }
    sections
}

/// Newest valid signature date in `section`.
pub(crate) fn section_date(section: &str, site: Option<&WikiSite>) -> Option<NaiveDate> {
    let months = effective_table(site);
    SIGNATURE
        .captures_iter(section)
        .filter_map(|caps| {
            let day: u32 = caps["day"].parse().ok()?;
            let year: i32 = caps["year"].parse().ok()?;
            let month = months.index_of(&caps["month"])?;
            NaiveDate::from_ymd_opt(year, u32::from(month), day)
        })
        .max()
}

fn templates_for(site: Option<&WikiSite>) -> &[WarningTemplate] {
    match site {
        Some(site) if !site.project.warning_templates.is_empty() => {
            site.project.warning_templates.as_slice()
        }
        _ => DEFAULT_TEMPLATES.as_slice(),
    }
}

/// Find every warning on a talk page.
///
/// Each section is dated by its newest signature and every template marker
/// in the section produces one event carrying that date.
pub fn scan_events(page: &str, site: Option<&WikiSite>) -> Vec<TalkPageEvent> {
    let templates = templates_for(site);
    let mut events = Vec::new();

    for section in split_sections(page) {
        let matched: Vec<&WarningTemplate> = templates
            .iter()
            .filter(|template| section.contains(template.marker.as_str()))
            .collect();
        if matched.is_empty() {
            continue;
        }

        let date = section_date(section, site);
        for template in matched {
            events.push(TalkPageEvent {
                template: template.marker.clone(),
                date,
                level: template.level,
            });
        }
    }
    events
}

/// Current warning level of a user, from the text of their talk page.
///
/// # Arguments
///
/// * `page` - Wikitext of the talk page
/// * `cutoff` - Warnings dated before this day are stale
/// * `site` - Site whose templates, month names and trimming policy apply
///
/// # Returns
///
/// The highest level among qualifying warnings, or 0 if there are none.
pub fn get_level(page: &str, cutoff: NaiveDate, site: Option<&WikiSite>) -> u8 {
    let trim = site.is_none_or(|site| site.project.trim_old_warnings);
    let events = scan_events(page, site);
    let level = events
        .iter()
        .filter(|event| event.qualifies(cutoff, trim))
        .map(|event| event.level)
        .max()
        .unwrap_or(0);
    debug!(events = events.len(), level, %cutoff, trim, "computed talk page level");
    level
}
