//! Variant values for untyped mappings.

use serde::Serialize;
use std::collections::BTreeMap;

/// A YAML value of any shape.
///
/// Returned by [`get_hash`](super::get_hash) when the caller does not know
/// the type of each entry in advance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// The value as a string, if it is a scalar.
    pub fn as_string(&self) -> Option<String> {
        match self {
            ConfigValue::Bool(b) => Some(b.to_string()),
            ConfigValue::Int(i) => Some(i.to_string()),
            ConfigValue::Double(d) => Some(d.to_string()),
            ConfigValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Whether this is a list or a map.
    pub fn is_collection(&self) -> bool {
        matches!(self, ConfigValue::List(_) | ConfigValue::Map(_))
    }
}
