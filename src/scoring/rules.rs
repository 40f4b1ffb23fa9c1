//! Score rule types and the per-site registry.

use serde::Serialize;

/// Kind of a score rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// Regular expression matched against added text.
    Pattern,
    /// Plain word matched against added text.
    Word,
    /// Pattern that only applies outside talk namespaces.
    NoTalkPattern,
    /// Word that only applies outside talk namespaces.
    NoTalkWord,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 4] = [
        Self::Pattern,
        Self::Word,
        Self::NoTalkPattern,
        Self::NoTalkWord,
    ];

    /// Configuration key holding the rules of this category.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pattern => "score-patterns",
            Self::Word => "score-words",
            Self::NoTalkPattern => "no-talk-score-patterns",
            Self::NoTalkWord => "no-talk-score-words",
        }
    }

    /// Whether expressions of this category are regular expressions.
    pub fn is_pattern(self) -> bool {
        matches!(self, Self::Pattern | Self::NoTalkPattern)
    }
}

/// A weighted word or pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRule {
    pub expression: String,
    pub score: i32,
    pub category: ScoreCategory,
}

impl ScoreRule {
    pub fn new(expression: impl Into<String>, score: i32, category: ScoreCategory) -> Self {
        Self {
            expression: expression.into(),
            score,
            category,
        }
    }
}

/// The score rules of one site, kept per category in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreRegistry {
    patterns: Vec<ScoreRule>,
    words: Vec<ScoreRule>,
    no_talk_patterns: Vec<ScoreRule>,
    no_talk_words: Vec<ScoreRule>,
}

impl ScoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the list of its category.
    pub fn push(&mut self, rule: ScoreRule) {
        self.list_mut(rule.category).push(rule);
    }

    /// Rules of one category, in the order they were added.
    pub fn rules(&self, category: ScoreCategory) -> &[ScoreRule] {
        match category {
            ScoreCategory::Pattern => &self.patterns,
            ScoreCategory::Word => &self.words,
            ScoreCategory::NoTalkPattern => &self.no_talk_patterns,
            ScoreCategory::NoTalkWord => &self.no_talk_words,
        }
    }

    /// All rules, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreRule> {
        ScoreCategory::ALL
            .into_iter()
            .flat_map(move |category| self.rules(category).iter())
    }

    pub fn len(&self) -> usize {
        self.patterns.len() + self.words.len() + self.no_talk_patterns.len() + self.no_talk_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
        self.words.clear();
        self.no_talk_patterns.clear();
        self.no_talk_words.clear();
    }

    fn list_mut(&mut self, category: ScoreCategory) -> &mut Vec<ScoreRule> {
        match category {
            ScoreCategory::Pattern => &mut self.patterns,
            ScoreCategory::Word => &mut self.words,
            ScoreCategory::NoTalkPattern => &mut self.no_talk_patterns,
            ScoreCategory::NoTalkWord => &mut self.no_talk_words,
        }
    }
}
