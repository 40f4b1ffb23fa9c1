//! Tests for the legacy parser.

use super::block::{indentation, indented_block, is_assignment};
use super::*;

const SAMPLE: &str = "\
enable-all = true
min-version = 3.1.0
ip-score = 800
summary = Reverted edits by $1 = vandalism

tags =
    huggle,
    mobile edit,
    visualeditor,
";

#[test]
fn test_parse_value_present() {
    assert_eq!(parse_value("min-version", SAMPLE, "0"), "3.1.0");
    assert_eq!(parse_value("ip-score", SAMPLE, ""), "800");
}

#[test]
fn test_parse_value_keeps_text_after_first_equals() {
    assert_eq!(
        parse_value("summary", SAMPLE, ""),
        "Reverted edits by $1 = vandalism"
    );
}

#[test]
fn test_parse_value_missing_returns_default() {
    assert_eq!(parse_value("nonexistent", SAMPLE, "fallback"), "fallback");
    assert_eq!(parse_value("nonexistent", "", ""), "");
}

#[test]
fn test_parse_value_requires_whole_key() {
    let content = "enable-all-wikis = false\nenable = yes";
    assert_eq!(parse_value("enable", content, "?"), "yes");
    assert_eq!(parse_value("enable-all", content, "?"), "?");
}

#[test]
fn test_parse_value_ignores_indented_keys() {
    let content = "queues =\n    ip-score = 5\n";
    assert_eq!(parse_value("ip-score", content, "none"), "none");
}

#[test]
fn test_parse_value_last_assignment_wins() {
    let content = "mode = first\nother = x\nmode = second\n";
    assert_eq!(parse_value("mode", content, ""), "second");
}

#[test]
fn test_parse_value_without_spaces_and_crlf() {
    let content = "speedy=db-g1\r\nnext = 1\r\n";
    assert_eq!(parse_value("speedy", content, ""), "db-g1");
}

#[test]
fn test_parse_bool_vocabulary() {
    for token in ["true", "TRUE", "Yes", "on", "1"] {
        let content = format!("flag = {}", token);
        assert!(parse_bool("flag", &content, false), "token {token}");
    }
    for token in ["false", "False", "NO", "off", "0"] {
        let content = format!("flag = {}", token);
        assert!(!parse_bool("flag", &content, true), "token {token}");
    }
}

#[test]
fn test_parse_bool_unknown_token_returns_default() {
    assert!(parse_bool("flag", "flag = maybe", true));
    assert!(!parse_bool("flag", "flag = maybe", false));
    assert!(parse_bool("flag", "flag =", true));
    assert!(!parse_bool("missing", SAMPLE, false));
    assert!(parse_bool("enable-all", SAMPLE, false));
}

#[test]
fn test_parse_bool_token() {
    assert_eq!(parse_bool_token(" yes "), Some(true));
    assert_eq!(parse_bool_token("Off"), Some(false));
    assert_eq!(parse_bool_token("2"), None);
    assert_eq!(parse_bool_token(""), None);
}

#[test]
fn test_parse_int() {
    assert_eq!(parse_int("ip-score", SAMPLE, 0), 800);
    assert_eq!(parse_int("min-version", SAMPLE, -1), -1);
    assert_eq!(parse_int("missing", SAMPLE, 42), 42);
    assert_eq!(parse_int("n", "n = -15", 0), -15);
    assert_eq!(parse_int("n", "n = 99999999999", 7), 7);
}

#[test]
fn test_parse_list_comma_only() {
    assert_eq!(parse_list("tags", "tags = a,b,c", true), vec!["a", "b", "c"]);
}

#[test]
fn test_parse_list_newline_separated() {
    assert_eq!(parse_list("tags", "tags = a\nb\nc", false), vec!["a", "b", "c"]);
}

#[test]
fn test_parse_list_trailing_comma() {
    assert_eq!(parse_list("tags", "tags = a,b,", true), vec!["a", "b"]);
}

#[test]
fn test_parse_list_indented_block() {
    assert_eq!(
        parse_list("tags", SAMPLE, false),
        vec!["huggle", "mobile edit", "visualeditor"]
    );
}

#[test]
fn test_parse_list_comma_mode_multiple_lines() {
    let content = "ns =\n    0,1,\n    2,3,\n\nother = x";
    assert_eq!(parse_list("ns", content, true), vec!["0", "1", "2", "3"]);
}

#[test]
fn test_parse_list_comma_mode_keeps_items_untrimmed() {
    assert_eq!(parse_list("tags", "tags = a, b", true), vec!["a", " b"]);
}

#[test]
fn test_parse_list_block_ends_at_blank_line_or_next_key() {
    let content = "a =\n    1\n    2\nb = 3\n\n    stray\n";
    assert_eq!(parse_list("a", content, false), vec!["1", "2"]);
    assert_eq!(parse_list("b", content, false), vec!["3"]);
}

#[test]
fn test_parse_list_multiple_assignments_contribute_in_order() {
    let content = "w = one\nx = 1\nw = two,three\n";
    assert_eq!(parse_list("w", content, true), vec!["one", "two", "three"]);
}

#[test]
fn test_parse_list_missing_key() {
    assert!(parse_list("tags", "other = 1", false).is_empty());
    assert_eq!(
        parse_list_or("tags", "other = 1", vec!["x".to_string()], false),
        vec!["x"]
    );
}

#[test]
fn test_parse_list_or_present_key_ignores_default() {
    assert_eq!(
        parse_list_or("tags", "tags = a,b", vec!["x".to_string()], true),
        vec!["a", "b"]
    );
    // Present but empty is a real value, not a missing key.
    assert!(parse_list_or("tags", "tags =", vec!["x".to_string()], true).is_empty());
}

#[test]
fn test_parse_trimmed_list() {
    let content = "tags = a , , b ,c,";
    assert_eq!(
        parse_trimmed_list("tags", content, true, false),
        vec!["a", "", "b", "c"]
    );
    assert_eq!(
        parse_trimmed_list("tags", content, true, true),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_parse_trimmed_list_newline_mode() {
    let content = "list =\n    first ,\n    second,,\n";
    assert_eq!(
        parse_trimmed_list("list", content, false, true),
        vec!["first", "second"]
    );
}

#[test]
fn test_is_assignment() {
    assert!(is_assignment("ip-score = 5"));
    assert!(is_assignment("key=value"));
    assert!(!is_assignment("    key = value"));
    assert!(!is_assignment("just text"));
    assert!(!is_assignment("(foo|bar)=baz;5"));
    assert!(!is_assignment("= value"));
}

#[test]
fn test_indented_block_spans_blank_lines() {
    let content = "queues = ignored\n    A:\n\n        x = 1\n\n    B:\nnext = 2\n    C:\n";
    assert_eq!(
        indented_block("queues", content),
        vec!["    A:", "        x = 1", "    B:"]
    );
    assert!(indented_block("missing", content).is_empty());
}

#[test]
fn test_indentation_width() {
    assert_eq!(indentation("    A:"), 4);
    assert_eq!(indentation("\tfield"), 1);
    assert_eq!(indentation("top"), 0);
}
