//! Score rules for the edit scoring engine.
//!
//! Four rule lists are read from configuration, one per [`ScoreCategory`].
//! Every entry is an expression and a score separated by `;`:
//!
//! ```text
//! score-words =
//!     poop;200
//!     stupid;150
//! score-patterns =
//!     (ha){3,};120
//! ```
//!
//! The YAML form accepts the same `expression;score` strings, as well as
//! `{expression, score}` mappings and `{score, list}` groups that give one
//! score to many expressions. Malformed entries are logged and skipped.
//! Parsed rules are appended to a [`ScoreRegistry`]; nothing is deduplicated.

mod compile;
mod rules;
mod source;


pub use compile::{
    parse_no_talk_patterns, parse_no_talk_patterns_yaml, parse_no_talk_words,
    parse_no_talk_words_yaml, parse_patterns, parse_patterns_yaml, parse_words, parse_words_yaml,
};
pub use rules::{ScoreCategory, ScoreRegistry, ScoreRule};
pub use source::SCORE_DELIMITER;
