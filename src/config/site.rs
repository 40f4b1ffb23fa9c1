//! A wiki and everything configured for it.

use super::ProjectConfiguration;
use crate::scoring::ScoreRegistry;
use crate::talk::MonthTable;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WikiSite {
    pub name: String,
    pub project: ProjectConfiguration,
    /// Localized month names. Empty means English.
    pub months: MonthTable,
    /// Score rules, accumulated across every loaded source.
    pub scores: ScoreRegistry,
}

impl WikiSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
