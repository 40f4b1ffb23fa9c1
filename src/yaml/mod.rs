//! Typed extraction from YAML configuration documents.
//!
//! The extractors never touch a concrete YAML library directly. They work on
//! anything implementing [`YamlNode`], which `serde_yaml::Value` does out of
//! the box. Scalar extractors take a default and return it for a missing key
//! or an unconvertible value. Collection extractors return an
//! [`Extracted`] so callers can tell a default apart from a parsed empty
//! collection.

mod extract;
mod node;
mod value;

#[cfg(test)]
mod tests;

pub use extract::{
    Extracted, get_bool, get_double, get_hash, get_hash_of_hash, get_int,
    get_list_of_string_list, get_string, get_string_hash, get_string_list, hash_from_node,
    list_from_node,
};
pub use node::YamlNode;
pub use value::ConfigValue;
