//! Tests for YAML extraction.

use super::*;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

fn doc(yaml: &str) -> Value {
    serde_yaml::from_str(yaml).unwrap()
}

const SAMPLE: &str = r#"
enable-all: true
legacy-bool: "yes"
min-version: "3.1.0"
ip-score: 800
huge: 99999999999
ratio: 0.75
quoted-int: "42"
tags:
  - huggle
  - 12
  - nested: value
  - false
empty-list: []
revert-summaries:
  vandalism: Reverted vandalism
  spam: Reverted spam
  nested:
    deep: value
warnings:
  vandalism:
    name: Vandalism
    summary: Reverted vandalism
  spam:
    name: Spam
  broken: just a string
months:
  - [January, Jan]
  - [February, Feb]
  - March
  - { odd: entry }
options:
  history: 50
  colors: [red, green]
  flag: true
  label: text
  nothing: ~
"#;

#[test]
fn test_scalar_extractors_return_values() {
    let node = doc(SAMPLE);
    assert!(get_bool(&node, "enable-all", false));
    assert_eq!(get_string(&node, "min-version", ""), "3.1.0");
    assert_eq!(get_int(&node, "ip-score", 0), 800);
    assert_eq!(get_double(&node, "ratio", 0.0), 0.75);
}

#[test]
fn test_scalar_extractors_missing_key_returns_default() {
    let node = doc(SAMPLE);
    assert!(get_bool(&node, "nope", true));
    assert_eq!(get_string(&node, "nope", "fallback"), "fallback");
    assert_eq!(get_int(&node, "nope", -3), -3);
    assert_eq!(get_double(&node, "nope", 1.5), 1.5);
}

#[test]
fn test_scalar_extractors_coerce_compatible_scalars() {
    let node = doc(SAMPLE);
    assert!(get_bool(&node, "legacy-bool", false));
    assert_eq!(get_string(&node, "ip-score", ""), "800");
    assert_eq!(get_string(&node, "enable-all", ""), "true");
    assert_eq!(get_int(&node, "quoted-int", 0), 42);
    assert_eq!(get_double(&node, "ip-score", 0.0), 800.0);
}

#[test]
fn test_scalar_extractors_wrong_type_returns_default() {
    let node = doc(SAMPLE);
    assert!(!get_bool(&node, "min-version", false));
    assert_eq!(get_int(&node, "min-version", 7), 7);
    assert_eq!(get_int(&node, "ratio", 7), 7);
    assert_eq!(get_int(&node, "huge", 7), 7);
    assert_eq!(get_string(&node, "tags", "x"), "x");
    assert_eq!(get_double(&node, "tags", 2.0), 2.0);
}

#[test]
fn test_extractors_on_non_mapping_root() {
    let node = doc("- a\n- b\n");
    assert_eq!(get_string(&node, "a", "d"), "d");
    assert!(get_string_list(&node, "a", Vec::new()).used_default);
}

#[test]
fn test_programmatic_mapping_round_trip() {
    let mut mapping = Mapping::new();
    mapping.insert(Value::from("name"), Value::from("Huggle"));
    mapping.insert(Value::from("count"), Value::from(12));
    mapping.insert(Value::from("enabled"), Value::from(false));
    mapping.insert(Value::from("weight"), Value::from(2.5));
    let node = Value::Mapping(mapping);

    assert_eq!(get_string(&node, "name", ""), "Huggle");
    assert_eq!(get_int(&node, "count", 0), 12);
    assert!(!get_bool(&node, "enabled", true));
    assert_eq!(get_double(&node, "weight", 0.0), 2.5);
}

#[test]
fn test_string_list_skips_non_scalars() {
    let node = doc(SAMPLE);
    let tags = get_string_list(&node, "tags", Vec::new());
    assert!(tags.is_parsed());
    assert_eq!(tags.value, vec!["huggle", "12", "false"]);
}

#[test]
fn test_string_list_empty_is_not_default() {
    let node = doc(SAMPLE);
    let missing = vec!["default".to_string()];

    let empty = get_string_list(&node, "empty-list", missing.clone());
    assert!(!empty.used_default);
    assert!(empty.value.is_empty());

    let absent = get_string_list(&node, "absent", missing.clone());
    assert!(absent.used_default);
    assert_eq!(absent.value, missing);

    let wrong = get_string_list(&node, "min-version", missing.clone());
    assert!(wrong.used_default);
    assert_eq!(wrong.value, missing);
}

#[test]
fn test_list_from_node() {
    let node = doc("[a, b, 3]");
    assert_eq!(list_from_node(&node, Vec::new()).value, vec!["a", "b", "3"]);

    let scalar = doc("text");
    let result = list_from_node(&scalar, vec!["x".to_string()]);
    assert!(result.used_default);
    assert_eq!(result.into_value(), vec!["x"]);
}

#[test]
fn test_string_hash() {
    let node = doc(SAMPLE);
    let hash = get_string_hash(&node, "revert-summaries", BTreeMap::new());
    assert!(hash.is_parsed());
    assert_eq!(hash.value.len(), 2);
    assert_eq!(hash.value["vandalism"], "Reverted vandalism");
    assert_eq!(hash.value["spam"], "Reverted spam");
}

#[test]
fn test_string_hash_missing_and_wrong_type() {
    let node = doc(SAMPLE);
    let mut fallback = BTreeMap::new();
    fallback.insert("k".to_string(), "v".to_string());

    let missing = get_string_hash(&node, "absent", fallback.clone());
    assert!(missing.used_default);
    assert_eq!(missing.value, fallback);

    let wrong = get_string_hash(&node, "tags", fallback.clone());
    assert!(wrong.used_default);

    assert!(hash_from_node(&doc("[1, 2]")).used_default);
}

#[test]
fn test_hash_of_hash() {
    let node = doc(SAMPLE);
    let warnings = get_hash_of_hash(&node, "warnings");
    assert!(warnings.is_parsed());
    assert_eq!(warnings.value.len(), 2);
    assert_eq!(warnings.value["vandalism"]["name"], "Vandalism");
    assert_eq!(warnings.value["vandalism"]["summary"], "Reverted vandalism");
    assert_eq!(warnings.value["spam"].len(), 1);
    assert!(!warnings.value.contains_key("broken"));

    assert!(get_hash_of_hash(&node, "absent").used_default);
    assert!(get_hash_of_hash(&node, "tags").used_default);
}

#[test]
fn test_list_of_string_list() {
    let node = doc(SAMPLE);
    let months = get_list_of_string_list(&node, "months");
    assert!(months.is_parsed());
    assert_eq!(
        months.value,
        vec![
            vec!["January".to_string(), "Jan".to_string()],
            vec!["February".to_string(), "Feb".to_string()],
            vec!["March".to_string()],
        ]
    );

    let numbers = doc("grid:\n  - [1, 2]\n  - [3.5, true]\n");
    assert_eq!(
        get_list_of_string_list(&numbers, "grid").value,
        vec![vec!["1", "2"], vec!["3.5", "true"]]
    );

    assert!(get_list_of_string_list(&node, "absent").used_default);
}

#[test]
fn test_hash_of_config_values() {
    let node = doc(SAMPLE);
    let options = get_hash(&node, "options", BTreeMap::new());
    assert!(options.is_parsed());
    assert_eq!(options.value["history"], ConfigValue::Int(50));
    assert_eq!(options.value["flag"], ConfigValue::Bool(true));
    assert_eq!(options.value["label"], ConfigValue::String("text".to_string()));
    assert_eq!(options.value["nothing"], ConfigValue::Null);
    assert_eq!(
        options.value["colors"],
        ConfigValue::List(vec![
            ConfigValue::String("red".to_string()),
            ConfigValue::String("green".to_string()),
        ])
    );
    assert!(options.value["colors"].is_collection());
    assert_eq!(options.value["history"].as_string().as_deref(), Some("50"));

    let mut fallback = BTreeMap::new();
    fallback.insert("a".to_string(), ConfigValue::Bool(false));
    let missing = get_hash(&node, "absent", fallback.clone());
    assert!(missing.used_default);
    assert_eq!(missing.value, fallback);
}

#[test]
fn test_node_capabilities() {
    let node = doc(SAMPLE);
    assert!(YamlNode::has_key(&node, "tags"));
    assert!(!YamlNode::has_key(&node, "absent"));
    assert!(YamlNode::is_mapping(&node));
    let options = YamlNode::get(&node, "options").unwrap();
    let nothing = YamlNode::get(options, "nothing").unwrap();
    assert!(nothing.is_null());
    assert_eq!(YamlNode::iter_mapping(options).len(), 5);
}

#[test]
fn test_extraction_does_not_modify_node() {
    let node = doc(SAMPLE);
    let before = node.clone();
    let _ = get_hash_of_hash(&node, "warnings");
    let _ = get_list_of_string_list(&node, "months");
    let _ = get_hash(&node, "options", BTreeMap::new());
    assert_eq!(node, before);
}
