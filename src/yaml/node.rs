//! The capability interface over a YAML tree.

use super::value::ConfigValue;
use crate::legacy::parse_bool_token;
use serde_yaml::Value;

/// Read-only view of a YAML node.
///
/// This is the only surface the extractors rely on, so any YAML library can
/// be adapted by implementing it. All methods are pure queries.
pub trait YamlNode {
    /// Child node stored under `key`, if this node is a mapping that has it.
    fn get(&self, key: &str) -> Option<&Self>;

    /// Whether this node is a mapping containing `key`.
    fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether this node is an explicit null (`~` or an empty value).
    fn is_null(&self) -> bool;

    /// The node as a string, if it is a scalar.
    fn as_scalar_string(&self) -> Option<String>;

    /// The node as a boolean, if it is a scalar that reads as one.
    fn as_scalar_bool(&self) -> Option<bool>;

    /// The node as an integer, if it is a scalar that reads as one.
    fn as_scalar_int(&self) -> Option<i64>;

    /// The node as a floating point number, if it is a scalar that reads as one.
    fn as_scalar_double(&self) -> Option<f64>;

    fn is_sequence(&self) -> bool;

    /// Items of a sequence node; empty for any other node.
    fn iter_sequence(&self) -> Vec<&Self>;

    fn is_mapping(&self) -> bool;

    /// Entries of a mapping node whose keys are scalars; empty for any other node.
    fn iter_mapping(&self) -> Vec<(String, &Self)>;

    /// Convert the whole subtree into a [`ConfigValue`].
    ///
    /// The provided implementation only knows about strings; libraries with
    /// typed scalars should override it.
    fn to_config_value(&self) -> ConfigValue {
        if self.is_sequence() {
            ConfigValue::List(
                self.iter_sequence()
                    .into_iter()
                    .map(|item| item.to_config_value())
                    .collect(),
            )
        } else if self.is_mapping() {
            ConfigValue::Map(
                self.iter_mapping()
                    .into_iter()
                    .map(|(key, item)| (key, item.to_config_value()))
                    .collect(),
            )
        } else {
            self.as_scalar_string()
                .map(ConfigValue::String)
                .unwrap_or(ConfigValue::Null)
        }
    }
}

impl YamlNode for Value {
    fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_scalar_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn as_scalar_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => parse_bool_token(s),
            Value::Number(n) => match n.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => None,
            },
            _ => None,
        }
    }

    fn as_scalar_int(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_scalar_double(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    fn iter_sequence(&self) -> Vec<&Self> {
        match self {
            Value::Sequence(items) => items.iter().collect(),
            _ => Vec::new(),
        }
    }

    fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    fn iter_mapping(&self) -> Vec<(String, &Self)> {
        match self {
            Value::Mapping(mapping) => mapping
                .iter()
                .filter_map(|(key, item)| key.as_scalar_string().map(|key| (key, item)))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn to_config_value(&self) -> ConfigValue {
        match self {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigValue::Int(i),
                None => n
                    .as_f64()
                    .map(ConfigValue::Double)
                    .unwrap_or(ConfigValue::Null),
            },
            Value::String(s) => ConfigValue::String(s.clone()),
            Value::Sequence(items) => {
                ConfigValue::List(items.iter().map(YamlNode::to_config_value).collect())
            }
            Value::Mapping(_) => ConfigValue::Map(
                self.iter_mapping()
                    .into_iter()
                    .map(|(key, item)| (key, item.to_config_value()))
                    .collect(),
            ),
            Value::Tagged(tagged) => tagged.value.to_config_value(),
        }
    }
}
