//! Assignment scanning.

/// One assignment of a key together with its continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment<'a> {
    /// Text after the first `=` on the assignment line, trimmed.
    pub(crate) head: &'a str,
    /// Lines following the assignment that belong to its value, untrimmed.
    pub(crate) continuation: Vec<&'a str>,
}

/// Returns every assignment of `key` in `content`, in input order.
pub(crate) fn find_assignments<'a>(key: &str, content: &'a str) -> Vec<Assignment<'a>> {
    let key = key.trim();
    let mut found = Vec::new();
    let mut current: Option<Assignment<'a>> = None;

    for line in content.lines() {
        if let Some(head) = assigned_value(line, key) {
            found.extend(current.take());
            current = Some(Assignment {
                head,
                continuation: Vec::new(),
            });
            continue;
        }

        if line.trim().is_empty() || is_assignment(line) {
            found.extend(current.take());
        } else if let Some(open) = current.as_mut() {
            open.continuation.push(line);
        }
    }

    found.extend(current);
    found
}

/// Returns the indented lines following every assignment of `key`.
///
/// Unlike [`find_assignments`], blank lines do not close the block, only a
/// non-blank line starting at column 0 does. Blank lines are dropped and the
/// returned lines keep their indentation.
pub(crate) fn indented_block<'a>(key: &str, content: &'a str) -> Vec<&'a str> {
    let key = key.trim();
    let mut lines = Vec::new();
    let mut open = false;

    for line in content.lines() {
        if assigned_value(line, key).is_some() {
            open = true;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with(char::is_whitespace) {
            open = false;
        } else if open {
            lines.push(line);
        }
    }
    lines
}

/// Width of the leading whitespace of `line`.
pub(crate) fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Returns the trimmed value of `line` if the line assigns `key`.
fn assigned_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?;
    let value = rest.trim_start_matches([' ', '\t']).strip_prefix('=')?;
    Some(value.trim())
}

/// Whether `line` starts a new assignment (of any key).
///
/// Indented lines never do.
pub(crate) fn is_assignment(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    match line.split_once('=') {
        Some((key, _)) => {
            let key = key.trim_end();
            !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
        None => false,
    }
}
