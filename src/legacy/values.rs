//! Typed lookups over legacy configuration text.

use super::block::{Assignment, find_assignments};
use tracing::debug;

/// Parse the value of `key`.
///
/// When the key is assigned more than once the last assignment wins.
///
/// # Returns
///
/// The trimmed text after the first `=`, or `missing` if the key is absent.
pub fn parse_value(key: &str, content: &str, missing: &str) -> String {
    match find_assignments(key, content).last() {
        Some(assignment) => assignment.head.to_string(),
        None => missing.to_string(),
    }
}

/// Interpret a boolean token.
///
/// Accepts `true`, `yes`, `on`, `1` and `false`, `no`, `off`, `0` in any case.
pub fn parse_bool_token(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a boolean value of `key`, falling back to `missing`.
pub fn parse_bool(key: &str, content: &str, missing: bool) -> bool {
    let Some(assignment) = find_assignments(key, content).pop() else {
        return missing;
    };
    parse_bool_token(assignment.head).unwrap_or_else(|| {
        debug!(key, value = assignment.head, "not a boolean, using default");
        missing
    })
}

/// Parse an integer value of `key`, falling back to `missing`.
pub fn parse_int(key: &str, content: &str, missing: i32) -> i32 {
    let Some(assignment) = find_assignments(key, content).pop() else {
        return missing;
    };
    assignment.head.parse().unwrap_or_else(|_| {
        debug!(key, value = assignment.head, "not an integer, using default");
        missing
    })
}

/// Parse a list of values for `key`.
///
/// Every assignment of the key contributes, in input order, together with
/// its continuation lines. By default each line is one item. With
/// `comma_only` the items are separated by commas and a line may hold
/// several of them. Trailing commas are stripped in both modes; items are
/// otherwise returned as written.
///
/// # Example
///
/// ```
/// use huggle_parser::legacy::parse_list;
///
/// let items = parse_list("tags", "tags = a,b,c,", true);
/// assert_eq!(items, vec!["a", "b", "c"]);
/// ```
pub fn parse_list(key: &str, content: &str, comma_only: bool) -> Vec<String> {
    split_items(&find_assignments(key, content), comma_only)
}

/// Like [`parse_list`], but returns `missing` when the key is absent.
pub fn parse_list_or(
    key: &str,
    content: &str,
    missing: Vec<String>,
    comma_only: bool,
) -> Vec<String> {
    let assignments = find_assignments(key, content);
    if assignments.is_empty() {
        return missing;
    }
    split_items(&assignments, comma_only)
}

/// Like [`parse_list`], but every item is trimmed of whitespace and
/// trailing commas. With `drop_empty` zero-length items are removed.
pub fn parse_trimmed_list(
    key: &str,
    content: &str,
    comma_only: bool,
    drop_empty: bool,
) -> Vec<String> {
    parse_list(key, content, comma_only)
        .into_iter()
        .map(|item| item.trim().trim_end_matches(',').trim_end().to_string())
        .filter(|item| !drop_empty || !item.is_empty())
        .collect()
}

fn split_items(assignments: &[Assignment<'_>], comma_only: bool) -> Vec<String> {
    let lines = assignments.iter().flat_map(|assignment| {
        std::iter::once(assignment.head).chain(assignment.continuation.iter().map(|l| l.trim()))
    });

    let mut items = Vec::new();
    for line in lines {
        let line = line.trim_end_matches(',');
        if line.is_empty() {
            continue;
        }
        if comma_only {
            items.extend(line.split(',').map(str::to_string));
        } else {
            items.push(line.to_string());
        }
    }
    items
}
