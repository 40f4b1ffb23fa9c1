//! Translation between warning keys, display names and revert summaries.
//!
//! Warning tables are lists of `key;value` entries. The key is the short
//! identifier used internally (`vandalism`), the value is either the
//! human-readable name of the warning or the edit summary used when
//! reverting for that reason.

use crate::config::{ProjectConfiguration, UserConfiguration};
use serde::Serialize;

const ENTRY_DELIMITER: char = ';';

/// One `key;value` entry of a warning table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a `key;value` entry, trimming both halves.
    ///
    /// Returns `None` when the entry has no delimiter or an empty key.
    pub fn parse(item: &str) -> Option<Self> {
        let (key, value) = item.split_once(ENTRY_DELIMITER)?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, value.trim()))
    }
}

/// Text before the first `;` of `item`, or all of it when there is none.
pub fn entry_key(item: &str) -> &str {
    item.split_once(ENTRY_DELIMITER)
        .map_or(item, |(key, _)| key)
}

/// Text after the first `;` of `item`, or all of it when there is none.
pub fn entry_value(item: &str) -> &str {
    item.split_once(ENTRY_DELIMITER)
        .map_or(item, |(_, value)| value)
}

fn lookup<'a>(entries: &'a [KeyValue], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.value.as_str())
}

/// Revert summary for a warning key.
///
/// The user's override wins over the project's entry. Returns an empty
/// string when neither defines the key.
pub fn summary_from_key(
    key: &str,
    project: &ProjectConfiguration,
    user: Option<&UserConfiguration>,
) -> String {
    user.and_then(|user| lookup(&user.revert_summaries, key))
        .or_else(|| lookup(&project.revert_summaries, key))
        .unwrap_or_default()
        .to_string()
}

/// Display name of a warning key, or an empty string.
pub fn name_from_key(key: &str, project: &ProjectConfiguration) -> String {
    lookup(&project.warning_types, key)
        .unwrap_or_default()
        .to_string()
}

/// Warning key with the given display name, or an empty string.
pub fn key_from_name(name: &str, project: &ProjectConfiguration) -> String {
    project
        .warning_types
        .iter()
        .find(|entry| entry.value == name)
        .map(|entry| entry.key.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectConfiguration {
        ProjectConfiguration {
            warning_types: vec![
                KeyValue::new("vandalism", "Vandalism"),
                KeyValue::new("spam", "Spam links"),
            ],
            revert_summaries: vec![
                KeyValue::new("vandalism", "Reverted vandalism"),
                KeyValue::new("spam", "Removed spam"),
            ],
            ..ProjectConfiguration::default()
        }
    }

    #[test]
    fn test_entry_key_and_value() {
        assert_eq!(entry_key("spam;Spam links"), "spam");
        assert_eq!(entry_value("spam;Spam links"), "Spam links");
        assert_eq!(entry_value("a;b;c"), "b;c");
        assert_eq!(entry_key("plain"), "plain");
        assert_eq!(entry_value("plain"), "plain");
    }

    #[test]
    fn test_key_value_parse() {
        assert_eq!(
            KeyValue::parse(" spam ; Spam links "),
            Some(KeyValue::new("spam", "Spam links"))
        );
        assert_eq!(KeyValue::parse("no delimiter"), None);
        assert_eq!(KeyValue::parse(";orphan"), None);
        assert_eq!(KeyValue::parse("empty;"), Some(KeyValue::new("empty", "")));
    }

    #[test]
    fn test_summary_prefers_user_override() {
        let project = project();
        let user = UserConfiguration {
            revert_summaries: vec![KeyValue::new("vandalism", "rv vandal")],
            ..UserConfiguration::default()
        };

        assert_eq!(
            summary_from_key("vandalism", &project, Some(&user)),
            "rv vandal"
        );
        assert_eq!(summary_from_key("spam", &project, Some(&user)), "Removed spam");
        assert_eq!(
            summary_from_key("vandalism", &project, None),
            "Reverted vandalism"
        );
        assert_eq!(summary_from_key("unknown", &project, Some(&user)), "");
    }

    #[test]
    fn test_name_and_key_lookups() {
        let project = project();
        assert_eq!(name_from_key("spam", &project), "Spam links");
        assert_eq!(name_from_key("missing", &project), "");
        assert_eq!(key_from_name("Vandalism", &project), "vandalism");
        assert_eq!(key_from_name("vandalism", &project), "");
    }

    #[test]
    fn test_first_entry_wins_on_duplicate_keys() {
        let mut project = project();
        project
            .warning_types
            .push(KeyValue::new("spam", "Second spam"));
        assert_eq!(name_from_key("spam", &project), "Spam links");
    }
}
