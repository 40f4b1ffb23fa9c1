//! Compiling raw entries into score rules.

use super::rules::{ScoreCategory, ScoreRegistry, ScoreRule};
use super::source::{ScoreEntry, entries_from_legacy, entries_from_yaml};
use crate::yaml::YamlNode;
use regex::RegexBuilder;
use tracing::{debug, warn};

/// Append the `score-patterns` rules of legacy text to `registry`.
///
/// # Returns
///
/// The number of rules appended. Malformed entries are skipped.
pub fn parse_patterns(content: &str, registry: &mut ScoreRegistry) -> usize {
    compile_legacy(content, ScoreCategory::Pattern, registry)
}

/// Append the `score-words` rules of legacy text to `registry`.
pub fn parse_words(content: &str, registry: &mut ScoreRegistry) -> usize {
    compile_legacy(content, ScoreCategory::Word, registry)
}

/// Append the `no-talk-score-patterns` rules of legacy text to `registry`.
pub fn parse_no_talk_patterns(content: &str, registry: &mut ScoreRegistry) -> usize {
    compile_legacy(content, ScoreCategory::NoTalkPattern, registry)
}

/// Append the `no-talk-score-words` rules of legacy text to `registry`.
pub fn parse_no_talk_words(content: &str, registry: &mut ScoreRegistry) -> usize {
    compile_legacy(content, ScoreCategory::NoTalkWord, registry)
}

/// YAML counterpart of [`parse_patterns`].
pub fn parse_patterns_yaml<N: YamlNode>(node: &N, registry: &mut ScoreRegistry) -> usize {
    compile_yaml(node, ScoreCategory::Pattern, registry)
}

/// YAML counterpart of [`parse_words`].
pub fn parse_words_yaml<N: YamlNode>(node: &N, registry: &mut ScoreRegistry) -> usize {
    compile_yaml(node, ScoreCategory::Word, registry)
}

/// YAML counterpart of [`parse_no_talk_patterns`].
pub fn parse_no_talk_patterns_yaml<N: YamlNode>(node: &N, registry: &mut ScoreRegistry) -> usize {
    compile_yaml(node, ScoreCategory::NoTalkPattern, registry)
}

/// YAML counterpart of [`parse_no_talk_words`].
pub fn parse_no_talk_words_yaml<N: YamlNode>(node: &N, registry: &mut ScoreRegistry) -> usize {
    compile_yaml(node, ScoreCategory::NoTalkWord, registry)
}

fn compile_legacy(content: &str, category: ScoreCategory, registry: &mut ScoreRegistry) -> usize {
    compile_entries(entries_from_legacy(category.key(), content), category, registry)
}

fn compile_yaml<N: YamlNode>(
    node: &N,
    category: ScoreCategory,
    registry: &mut ScoreRegistry,
) -> usize {
    compile_entries(entries_from_yaml(category.key(), node), category, registry)
}

fn compile_entries(
    entries: Vec<ScoreEntry>,
    category: ScoreCategory,
    registry: &mut ScoreRegistry,
) -> usize {
    let mut appended = 0;
    for entry in entries {
        if let Some(rule) = compile_entry(&entry, category) {
            registry.push(rule);
            appended += 1;
        }
    }
    debug!(key = category.key(), appended, "compiled score rules");
    appended
}

fn compile_entry(entry: &ScoreEntry, category: ScoreCategory) -> Option<ScoreRule> {
    let expression = entry.expression.trim();
    if expression.is_empty() {
        warn!(key = category.key(), "skipping score entry with an empty expression");
        return None;
    }

    let Ok(score) = entry.score.trim().parse::<i32>() else {
        warn!(
            key = category.key(),
            expression,
            score = %entry.score,
            "skipping score entry without a numeric score"
        );
        return None;
    };

    if category.is_pattern() {
        if let Err(e) = RegexBuilder::new(expression).case_insensitive(true).build() {
            warn!(key = category.key(), expression, "skipping invalid pattern: {}", e);
            return None;
        }
    }

    Some(ScoreRule::new(expression, score, category))
}
