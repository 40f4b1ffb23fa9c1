//! Adapters turning either configuration format into raw score entries.

use crate::legacy::parse_list;
use crate::yaml::{YamlNode, list_from_node};
use tracing::warn;

/// Separator between an expression and its score.
///
/// Entries are split at the last occurrence, so expressions may contain it.
pub const SCORE_DELIMITER: char = ';';

/// An entry as written in the source, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreEntry {
    pub(crate) expression: String,
    pub(crate) score: String,
}

impl ScoreEntry {
    /// Split `expression;score`. Text without a delimiter has an empty score.
    pub(crate) fn split(text: &str) -> Self {
        match text.rsplit_once(SCORE_DELIMITER) {
            Some((expression, score)) => Self {
                expression: expression.to_string(),
                score: score.to_string(),
            },
            None => Self {
                expression: text.to_string(),
                score: String::new(),
            },
        }
    }
}

/// Entries listed under `key` in legacy text, one per line.
pub(crate) fn entries_from_legacy(key: &str, content: &str) -> Vec<ScoreEntry> {
    parse_list(key, content, false)
        .iter()
        .map(|line| ScoreEntry::split(line))
        .collect()
}

/// Entries listed under `key` in a YAML document.
pub(crate) fn entries_from_yaml<N: YamlNode>(key: &str, node: &N) -> Vec<ScoreEntry> {
    let Some(list) = node.get(key) else {
        return Vec::new();
    };
    if !list.is_sequence() {
        warn!(key, "score list is not a sequence, ignoring it");
        return Vec::new();
    }

    let mut entries = Vec::new();
    for item in list.iter_sequence() {
        if let Some(text) = item.as_scalar_string() {
            entries.push(ScoreEntry::split(&text));
        } else if item.is_mapping() {
            let score = item
                .get("score")
                .and_then(N::as_scalar_string)
                .unwrap_or_default();
            match item.get("list").filter(|group| group.is_sequence()) {
                Some(group) => {
                    for expression in list_from_node(group, Vec::new()).into_value() {
                        entries.push(ScoreEntry {
                            expression,
                            score: score.clone(),
                        });
                    }
                }
                None => entries.push(ScoreEntry {
                    expression: item
                        .get("expression")
                        .and_then(N::as_scalar_string)
                        .unwrap_or_default(),
                    score,
                }),
            }
        } else {
            warn!(key, "skipping score entry that is neither text nor a mapping");
        }
    }
    entries
}
