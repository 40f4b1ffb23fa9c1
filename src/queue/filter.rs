//! Queue filter types.

use serde::Serialize;

/// How a filter treats edits that have a given property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterMatch {
    /// The property does not matter (default).
    #[default]
    Ignore,
    /// Only edits with the property pass.
    Require,
    /// Edits with the property are dropped.
    Exclude,
}

impl FilterMatch {
    /// Parse a match mode, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "require" => Some(Self::Require),
            "exclude" => Some(Self::Exclude),
            _ => None,
        }
    }
}

/// Edit properties a filter can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterProperty {
    /// Edits by whitelisted users.
    Whitelisted,
    Bots,
    /// Edits made with assisted editing tools.
    Assisted,
    /// Edits by anonymous (IP) users.
    Anonymous,
    Minor,
    NewPages,
    /// Edits made by the current user.
    Own,
    Friends,
    Registered,
    Talk,
    Watched,
    Reverts,
    Userspace,
}

impl FilterProperty {
    /// Every property, in configuration order.
    pub const ALL: [FilterProperty; 13] = [
        Self::Whitelisted,
        Self::Bots,
        Self::Assisted,
        Self::Anonymous,
        Self::Minor,
        Self::NewPages,
        Self::Own,
        Self::Friends,
        Self::Registered,
        Self::Talk,
        Self::Watched,
        Self::Reverts,
        Self::Userspace,
    ];

    /// Configuration key of this property.
    pub fn key(self) -> &'static str {
        match self {
            Self::Whitelisted => "filter-ignored",
            Self::Bots => "filter-bots",
            Self::Assisted => "filter-assisted",
            Self::Anonymous => "filter-ip",
            Self::Minor => "filter-minor",
            Self::NewPages => "filter-new-pages",
            Self::Own => "filter-me",
            Self::Friends => "filter-friends",
            Self::Registered => "filter-users",
            Self::Talk => "filter-talk",
            Self::Watched => "filter-watched",
            Self::Reverts => "filter-reverts",
            Self::Userspace => "filter-userspace",
        }
    }

    /// Look up a property by configuration key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|property| property.key() == key)
    }
}

/// A single criterion of a queue filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchRule {
    Property {
        property: FilterProperty,
        mode: FilterMatch,
    },
    /// Only edits in these namespaces pass.
    Namespaces { namespaces: Vec<i32> },
    /// Only edits carrying one of these change tags pass.
    RequiredTags { tags: Vec<String> },
    /// Edits carrying one of these change tags are dropped.
    IgnoredTags { tags: Vec<String> },
}

/// A named queue filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueFilter {
    pub name: String,
    /// Criteria in source order.
    pub rules: Vec<MatchRule>,
    /// Set for filters that come from a protected, shared configuration and
    /// must not be edited by the user.
    pub locked: bool,
}

impl QueueFilter {
    pub fn new(name: impl Into<String>, rules: Vec<MatchRule>, locked: bool) -> Self {
        Self {
            name: name.into(),
            rules,
            locked,
        }
    }

    /// Effective mode for `property`. A later rule overrides an earlier one.
    pub fn mode_for(&self, property: FilterProperty) -> FilterMatch {
        self.rules
            .iter()
            .rev()
            .find_map(|rule| match rule {
                MatchRule::Property { property: p, mode } if *p == property => Some(*mode),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Namespace restriction, if any. A later rule overrides an earlier one.
    pub fn namespaces(&self) -> Option<&[i32]> {
        self.rules.iter().rev().find_map(|rule| match rule {
            MatchRule::Namespaces { namespaces } => Some(namespaces.as_slice()),
            _ => None,
        })
    }

    /// All required tags across rules.
    pub fn required_tags(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                MatchRule::RequiredTags { tags } => Some(tags),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// All ignored tags across rules.
    pub fn ignored_tags(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter_map(|rule| match rule {
                MatchRule::IgnoredTags { tags } => Some(tags),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
