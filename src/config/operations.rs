//! Loading configuration objects from legacy text or YAML.

use super::types::*;
use super::{ProjectConfiguration, UserConfiguration, WikiSite};
use crate::legacy::{parse_bool, parse_int, parse_trimmed_list, parse_value};
use crate::queue::{parse_queue_list, parse_queue_list_yaml};
use crate::scoring::{
    parse_no_talk_patterns, parse_no_talk_patterns_yaml, parse_no_talk_words,
    parse_no_talk_words_yaml, parse_patterns, parse_patterns_yaml, parse_words, parse_words_yaml,
};
use crate::talk::{MonthTable, WarningTemplate};
use crate::warnings::KeyValue;
use crate::yaml::{
    YamlNode, get_bool, get_hash, get_hash_of_hash, get_int, get_list_of_string_list, get_string,
    list_from_node,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Parse `key;value` lines, skipping and logging malformed ones.
fn key_values(key: &str, items: Vec<String>) -> Vec<KeyValue> {
    items
        .iter()
        .filter_map(|item| {
            let entry = KeyValue::parse(item);
            if entry.is_none() {
                warn!(key, entry = %item, "skipping malformed key;value entry");
            }
            entry
        })
        .collect()
}

fn warning_templates(items: &[String]) -> Vec<WarningTemplate> {
    items
        .iter()
        .filter_map(|item| {
            let template = WarningTemplate::parse(item);
            if template.is_none() {
                warn!(entry = %item, "skipping malformed warning template");
            }
            template
        })
        .collect()
}

/// One month per line, alternative spellings separated by `;`.
fn month_table(lines: Vec<String>) -> MonthTable {
    MonthTable::new(
        lines
            .iter()
            .map(|line| line.split(';').map(str::to_string).collect())
            .collect(),
    )
}

/// Read a YAML table given either as a list of `key;value` strings or as a
/// mapping. Entries keep their order in the document.
fn key_values_yaml<N: YamlNode>(node: &N, key: &str) -> Vec<KeyValue> {
    let Some(table) = node.get(key) else {
        return Vec::new();
    };
    if table.is_sequence() {
        return key_values(key, list_from_node(table, Vec::new()).into_value());
    }
    if !table.is_mapping() {
        warn!(key, "expected a list or a mapping, ignoring");
        return Vec::new();
    }
    table
        .iter_mapping()
        .into_iter()
        .filter_map(|(entry, value)| match value.as_scalar_string() {
            Some(value) => Some(KeyValue::new(entry, value)),
            None => {
                warn!(key, entry = %entry, "skipping entry that is not text");
                None
            }
        })
        .collect()
}

/// Add entries whose key is not present yet.
fn merge_missing(entries: &mut Vec<KeyValue>, key: &str, value: Option<&String>) {
    let Some(value) = value else {
        return;
    };
    if entries.iter().any(|entry| entry.key == key) {
        return;
    }
    entries.push(KeyValue::new(key, value.clone()));
}

impl ProjectConfiguration {
    /// Build a project configuration from legacy text.
    ///
    /// Missing keys keep their defaults.
    pub fn from_legacy(content: &str) -> Self {
        let defaults = Self::default();
        let config = Self {
            enable_all: parse_bool(ENABLE_ALL, content, defaults.enable_all),
            minimal_version: parse_value(MIN_VERSION, content, &defaults.minimal_version),
            ip_score: parse_int(IP_SCORE, content, defaults.ip_score),
            bot_score: parse_int(BOT_SCORE, content, defaults.bot_score),
            template_age: parse_int(TEMPLATE_AGE, content, defaults.template_age),
            trim_old_warnings: parse_bool(TRIM_OLD_WARNINGS, content, defaults.trim_old_warnings),
            warning_templates: warning_templates(&parse_trimmed_list(
                WARNING_TEMPLATES,
                content,
                false,
                true,
            )),
            warning_types: key_values(
                WARNING_TYPES,
                parse_trimmed_list(WARNING_TYPES, content, false, true),
            ),
            revert_summaries: key_values(
                REVERT_SUMMARIES,
                parse_trimmed_list(REVERT_SUMMARIES, content, false, true),
            ),
            default_summary: parse_value(DEFAULT_SUMMARY, content, &defaults.default_summary),
            queues: parse_queue_list(content, true),
        };
        debug!(
            warning_types = config.warning_types.len(),
            queues = config.queues.len(),
            "loaded legacy project configuration"
        );
        config
    }

    /// Build a project configuration from a YAML document.
    ///
    /// Besides the flat `warning-types` and `revert-summaries` tables, a
    /// `warnings` mapping of `key: { name, summary }` is accepted. Flat
    /// entries win over it.
    pub fn from_yaml<N: YamlNode>(node: &N) -> Self {
        let defaults = Self::default();
        let mut warning_types = key_values_yaml(node, WARNING_TYPES);
        let mut revert_summaries = key_values_yaml(node, REVERT_SUMMARIES);

        for (key, fields) in get_hash_of_hash(node, WARNINGS).into_value() {
            merge_missing(&mut warning_types, &key, fields.get("name"));
            merge_missing(&mut revert_summaries, &key, fields.get("summary"));
        }

        let warning_templates = key_values_yaml(node, WARNING_TEMPLATES)
            .into_iter()
            .filter_map(|entry| {
                let template = WarningTemplate::parse(&format!("{};{}", entry.key, entry.value));
                if template.is_none() {
                    warn!(level = %entry.key, "skipping malformed warning template");
                }
                template
            })
            .collect();

        let config = Self {
            enable_all: get_bool(node, ENABLE_ALL, defaults.enable_all),
            minimal_version: get_string(node, MIN_VERSION, &defaults.minimal_version),
            ip_score: get_int(node, IP_SCORE, defaults.ip_score),
            bot_score: get_int(node, BOT_SCORE, defaults.bot_score),
            template_age: get_int(node, TEMPLATE_AGE, defaults.template_age),
            trim_old_warnings: get_bool(node, TRIM_OLD_WARNINGS, defaults.trim_old_warnings),
            warning_templates,
            warning_types,
            revert_summaries,
            default_summary: get_string(node, DEFAULT_SUMMARY, &defaults.default_summary),
            queues: parse_queue_list_yaml(node, true),
        };
        debug!(
            warning_types = config.warning_types.len(),
            queues = config.queues.len(),
            "loaded YAML project configuration"
        );
        config
    }
}

impl UserConfiguration {
    /// Build a user configuration from legacy text.
    pub fn from_legacy(content: &str) -> Self {
        Self {
            revert_summaries: key_values(
                REVERT_SUMMARIES,
                parse_trimmed_list(REVERT_SUMMARIES, content, false, true),
            ),
            queues: parse_queue_list(content, false),
            options: BTreeMap::new(),
        }
    }

    /// Build a user configuration from a YAML document.
    pub fn from_yaml<N: YamlNode>(node: &N) -> Self {
        Self {
            revert_summaries: key_values_yaml(node, REVERT_SUMMARIES),
            queues: parse_queue_list_yaml(node, false),
            options: get_hash(node, OPTIONS, BTreeMap::new()).into_value(),
        }
    }
}

impl WikiSite {
    /// Load the project configuration, month names and score rules of this
    /// site from legacy text.
    ///
    /// The project configuration and month table are replaced. Score rules
    /// are appended to the ones already loaded.
    pub fn load_legacy(&mut self, content: &str) {
        self.project = ProjectConfiguration::from_legacy(content);
        self.months = month_table(parse_trimmed_list(MONTHS, content, false, true));

        let added = parse_patterns(content, &mut self.scores)
            + parse_words(content, &mut self.scores)
            + parse_no_talk_patterns(content, &mut self.scores)
            + parse_no_talk_words(content, &mut self.scores);
        debug!(site = %self.name, added, "loaded score rules");
    }

    /// YAML counterpart of [`WikiSite::load_legacy`].
    ///
    /// `months` is a list with one entry per month, each a name or a list
    /// of alternative names.
    pub fn load_yaml<N: YamlNode>(&mut self, node: &N) {
        self.project = ProjectConfiguration::from_yaml(node);
        self.months = MonthTable::new(get_list_of_string_list(node, MONTHS).into_value());

        let added = parse_patterns_yaml(node, &mut self.scores)
            + parse_words_yaml(node, &mut self.scores)
            + parse_no_talk_patterns_yaml(node, &mut self.scores)
            + parse_no_talk_words_yaml(node, &mut self.scores);
        debug!(site = %self.name, added, "loaded score rules");
    }
}
