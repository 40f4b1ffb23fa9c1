//! Per-wiki project configuration.

use super::types::*;
use crate::queue::QueueFilter;
use crate::talk::WarningTemplate;
use crate::warnings::KeyValue;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Settings shared by every user of one wiki.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfiguration {
    pub enable_all: bool,
    /// Empty when the project does not require a version.
    pub minimal_version: String,
    pub ip_score: i32,
    pub bot_score: i32,

    /// Warnings older than this many days do not count.
    pub template_age: i32,
    pub trim_old_warnings: bool,
    pub warning_templates: Vec<WarningTemplate>,

    /// Warning key to display name, in source order. Keys only found in a
    /// YAML `warnings` mapping follow, sorted by key.
    pub warning_types: Vec<KeyValue>,
    /// Warning key to revert summary, ordered like `warning_types`.
    pub revert_summaries: Vec<KeyValue>,
    pub default_summary: String,

    /// Queue filters defined by the project. Always locked.
    pub queues: Vec<QueueFilter>,
}

impl Default for ProjectConfiguration {
    fn default() -> Self {
        Self {
            enable_all: false,
            minimal_version: String::new(),
            ip_score: default_ip_score(),
            bot_score: default_bot_score(),
            template_age: default_template_age(),
            trim_old_warnings: default_true(),
            warning_templates: Vec::new(),
            warning_types: Vec::new(),
            revert_summaries: Vec::new(),
            default_summary: default_summary(),
            queues: Vec::new(),
        }
    }
}

impl ProjectConfiguration {
    /// First day whose warnings still count, as seen on `today`.
    ///
    /// A negative age is treated as zero.
    pub fn warning_cutoff(&self, today: NaiveDate) -> NaiveDate {
        let age = u64::try_from(self.template_age).unwrap_or(0);
        today.checked_sub_days(Days::new(age)).unwrap_or(NaiveDate::MIN)
    }
}
