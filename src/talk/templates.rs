//! Warning templates and their levels.

use serde::Serialize;

const DEFAULT_FAMILIES: [&str; 10] = [
    "vandalism",
    "disruptive",
    "delete",
    "unsourced",
    "spam",
    "npov",
    "test",
    "defamatory",
    "biog",
    "error",
];

/// A warning template recognised on talk pages by the marker it leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningTemplate {
    pub level: u8,
    pub marker: String,
}

impl WarningTemplate {
    pub fn new(level: u8, marker: impl Into<String>) -> Self {
        Self {
            level,
            marker: marker.into(),
        }
    }

    /// Parse a `level;marker` entry.
    ///
    /// Returns `None` when the level is not a number from 1 to 255 or the
    /// marker is blank. Only the first `;` separates, so markers may contain
    /// further semicolons.
    pub fn parse(entry: &str) -> Option<Self> {
        let (level, marker) = entry.split_once(';')?;
        let level: u8 = level.trim().parse().ok()?;
        let marker = marker.trim();
        if level == 0 || marker.is_empty() {
            return None;
        }
        Some(Self::new(level, marker))
    }
}

/// Templates used when a site configures none.
///
/// Levels 1 to 4 of the common `uw-` families, plus the `4im` single
/// final warnings at level 4.
pub fn default_templates() -> Vec<WarningTemplate> {
    let mut templates = Vec::with_capacity(DEFAULT_FAMILIES.len() * 5);
    for family in DEFAULT_FAMILIES {
        for level in 1..=4u8 {
            templates.push(WarningTemplate::new(
                level,
                format!("<!-- Template:uw-{family}{level} -->"),
            ));
        }
        templates.push(WarningTemplate::new(
            4,
            format!("<!-- Template:uw-{family}4im -->"),
        ));
    }
    templates
}
