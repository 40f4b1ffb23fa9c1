//! Configuration keys and default values.

/// Whether the client is enabled for every user.
pub const ENABLE_ALL: &str = "enable-all";
/// Oldest client version allowed to edit.
pub const MIN_VERSION: &str = "min-version";
/// Score added to edits by anonymous users.
pub const IP_SCORE: &str = "ip-score";
/// Score added to edits by bots.
pub const BOT_SCORE: &str = "bot-score";
/// Age in days after which a warning no longer counts.
pub const TEMPLATE_AGE: &str = "template-age";
pub const TRIM_OLD_WARNINGS: &str = "trim-old-warnings";
pub const DEFAULT_SUMMARY: &str = "default-summary";
/// `key;name` entries naming each warning type.
pub const WARNING_TYPES: &str = "warning-types";
/// `key;summary` entries used when reverting.
pub const REVERT_SUMMARIES: &str = "revert-summaries";
/// `level;marker` entries recognised on talk pages.
pub const WARNING_TEMPLATES: &str = "warning-templates";
/// YAML only: warning key mapped to `name` and `summary`.
pub const WARNINGS: &str = "warnings";
pub const MONTHS: &str = "months";
/// YAML only: free-form user options.
pub const OPTIONS: &str = "options";

pub fn default_ip_score() -> i32 {
    800
}

pub fn default_bot_score() -> i32 {
    -200
}

pub fn default_template_age() -> i32 {
    30
}

pub fn default_true() -> bool {
    true
}

pub fn default_summary() -> String {
    "Reverted edits by $1 to last version by $2".to_string()
}
