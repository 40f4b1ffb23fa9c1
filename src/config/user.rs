//! Personal configuration of one user.

use crate::queue::QueueFilter;
use crate::warnings::KeyValue;
use crate::yaml::ConfigValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A user's overrides on top of the project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserConfiguration {
    /// Revert summaries that replace the project's for the same key.
    pub revert_summaries: Vec<KeyValue>,
    /// Personal queue filters. Never locked.
    pub queues: Vec<QueueFilter>,
    /// Untyped options, YAML only.
    pub options: BTreeMap<String, ConfigValue>,
}
