//! Scalar and collection extractors.

use super::node::YamlNode;
use super::value::ConfigValue;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Result of a collection lookup.
///
/// `used_default` is true when the key was absent or the node had the wrong
/// shape, in which case `value` is the caller's default. A present but empty
/// collection is a parsed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extracted<T> {
    pub value: T,
    pub used_default: bool,
}

impl<T> Extracted<T> {
    /// A value read from the document.
    pub fn parsed(value: T) -> Self {
        Self {
            value,
            used_default: false,
        }
    }

    /// A fallback value supplied by the caller.
    pub fn defaulted(value: T) -> Self {
        Self {
            value,
            used_default: true,
        }
    }

    /// Whether the value came from the document.
    pub fn is_parsed(&self) -> bool {
        !self.used_default
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Boolean under `key`, or `missing`.
pub fn get_bool<N: YamlNode>(node: &N, key: &str, missing: bool) -> bool {
    node.get(key).and_then(N::as_scalar_bool).unwrap_or(missing)
}

/// String under `key`, or `missing`. Numbers and booleans are converted.
pub fn get_string<N: YamlNode>(node: &N, key: &str, missing: &str) -> String {
    node.get(key)
        .and_then(N::as_scalar_string)
        .unwrap_or_else(|| missing.to_string())
}

/// Integer under `key`, or `missing`. Values outside `i32` fall back too.
pub fn get_int<N: YamlNode>(node: &N, key: &str, missing: i32) -> i32 {
    node.get(key)
        .and_then(N::as_scalar_int)
        .and_then(|value| i32::try_from(value).ok())
        .unwrap_or(missing)
}

/// Floating point number under `key`, or `missing`.
pub fn get_double<N: YamlNode>(node: &N, key: &str, missing: f64) -> f64 {
    node.get(key)
        .and_then(N::as_scalar_double)
        .unwrap_or(missing)
}

/// Read `node` itself as a list of strings.
///
/// Non-scalar items are skipped.
pub fn list_from_node<N: YamlNode>(node: &N, missing: Vec<String>) -> Extracted<Vec<String>> {
    if !node.is_sequence() {
        return Extracted::defaulted(missing);
    }

    let items = node
        .iter_sequence()
        .into_iter()
        .filter_map(|item| {
            let text = item.as_scalar_string();
            if text.is_none() {
                debug!("skipping non-scalar list item");
            }
            text
        })
        .collect();
    Extracted::parsed(items)
}

/// List of strings under `key`.
pub fn get_string_list<N: YamlNode>(
    node: &N,
    key: &str,
    missing: Vec<String>,
) -> Extracted<Vec<String>> {
    match node.get(key) {
        Some(child) => list_from_node(child, missing),
        None => Extracted::defaulted(missing),
    }
}

/// Read `node` itself as a mapping of strings.
///
/// Entries whose value is not a scalar are skipped.
pub fn hash_from_node<N: YamlNode>(node: &N) -> Extracted<BTreeMap<String, String>> {
    if !node.is_mapping() {
        return Extracted::defaulted(BTreeMap::new());
    }

    let entries = node
        .iter_mapping()
        .into_iter()
        .filter_map(|(key, item)| item.as_scalar_string().map(|value| (key, value)))
        .collect();
    Extracted::parsed(entries)
}

/// Mapping of strings under `key`.
pub fn get_string_hash<N: YamlNode>(
    node: &N,
    key: &str,
    missing: BTreeMap<String, String>,
) -> Extracted<BTreeMap<String, String>> {
    match node.get(key) {
        Some(child) if child.is_mapping() => hash_from_node(child),
        _ => Extracted::defaulted(missing),
    }
}

/// Mapping of arbitrary values under `key`.
pub fn get_hash<N: YamlNode>(
    node: &N,
    key: &str,
    missing: BTreeMap<String, ConfigValue>,
) -> Extracted<BTreeMap<String, ConfigValue>> {
    match node.get(key) {
        Some(child) if child.is_mapping() => Extracted::parsed(
            child
                .iter_mapping()
                .into_iter()
                .map(|(key, item)| (key, item.to_config_value()))
                .collect(),
        ),
        _ => Extracted::defaulted(missing),
    }
}

/// Mapping of mappings under `key`, flattened one level.
///
/// ```yaml
/// warnings:
///   vandalism:
///     name: Vandalism
///     summary: Reverted vandalism
/// ```
///
/// yields `{"vandalism": {"name": "Vandalism", "summary": "Reverted vandalism"}}`.
/// Outer entries whose value is not a mapping are skipped.
pub fn get_hash_of_hash<N: YamlNode>(
    node: &N,
    key: &str,
) -> Extracted<BTreeMap<String, BTreeMap<String, String>>> {
    let Some(child) = node.get(key).filter(|child| child.is_mapping()) else {
        return Extracted::defaulted(BTreeMap::new());
    };

    let mut result = BTreeMap::new();
    for (outer, item) in child.iter_mapping() {
        if !item.is_mapping() {
            debug!(key, entry = %outer, "skipping entry that is not a mapping");
            continue;
        }
        result.insert(outer, hash_from_node(item).into_value());
    }
    Extracted::parsed(result)
}

/// Sequence of sequences under `key`, with inner scalars converted to strings.
///
/// A scalar in the outer sequence becomes a one-element list.
pub fn get_list_of_string_list<N: YamlNode>(node: &N, key: &str) -> Extracted<Vec<Vec<String>>> {
    let Some(child) = node.get(key).filter(|child| child.is_sequence()) else {
        return Extracted::defaulted(Vec::new());
    };

    let mut result = Vec::new();
    for item in child.iter_sequence() {
        if item.is_sequence() {
            result.push(list_from_node(item, Vec::new()).into_value());
        } else if let Some(text) = item.as_scalar_string() {
            result.push(vec![text]);
        } else {
            debug!(key, "skipping list item that is neither a list nor a scalar");
        }
    }
    Extracted::parsed(result)
}
