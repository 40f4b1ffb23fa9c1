//! Adapters turning either configuration format into filter drafts.

use crate::legacy::{indentation, indented_block};
use crate::yaml::{YamlNode, list_from_node};
use tracing::warn;

/// Configuration key holding the queue definitions.
pub(crate) const QUEUES_KEY: &str = "queues";

/// A filter as written in the source, before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct FilterDraft {
    pub(crate) name: String,
    pub(crate) fields: Vec<FilterField>,
}

/// One `field = value` line of a filter draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterField {
    pub(crate) key: String,
    pub(crate) values: Vec<String>,
}

impl FilterField {
    fn new(key: &str, raw: &str) -> Self {
        Self {
            key: key.trim().to_string(),
            values: split_values(raw),
        }
    }
}

fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read drafts from the `queues` block of legacy text.
///
/// The block runs until the next line starting at column 0; blank lines
/// inside it are ignored. Filter headers (`Name:`) sit at the indentation of
/// the first line of the block, the fields of a filter are indented deeper.
pub(crate) fn drafts_from_legacy(content: &str) -> Vec<FilterDraft> {
    let lines = indented_block(QUEUES_KEY, content);
    let header_depth = lines.first().map_or(0, |line| indentation(line));
    let mut drafts: Vec<FilterDraft> = Vec::new();

    for raw in lines {
        let line = raw.trim().trim_end_matches(',').trim_end();
        if line.is_empty() {
            continue;
        }

        if indentation(raw) <= header_depth {
            match line.strip_suffix(':') {
                Some(name) if !name.contains('=') => drafts.push(FilterDraft {
                    name: name.trim().to_string(),
                    fields: Vec::new(),
                }),
                _ => warn!(line = %line, "skipping queue field outside of any filter"),
            }
            continue;
        }

        let Some((key, raw_value)) = line.split_once('=').or_else(|| line.split_once(':')) else {
            warn!(line = %line, "skipping queue line that is neither a filter nor a field");
            continue;
        };

        match drafts.last_mut() {
            Some(draft) => draft.fields.push(FilterField::new(key, raw_value)),
            None => warn!(line = %line, "skipping queue field outside of any filter"),
        }
    }

    drafts
}

/// Read drafts from the `queues` mapping of a YAML document.
///
/// A filter whose body is not a mapping (for example `Default: ~`) becomes a
/// draft without fields.
pub(crate) fn drafts_from_yaml<N: YamlNode>(node: &N) -> Vec<FilterDraft> {
    let Some(queues) = node.get(QUEUES_KEY) else {
        return Vec::new();
    };
    if !queues.is_mapping() {
        warn!("'{}' is not a mapping, no queues loaded", QUEUES_KEY);
        return Vec::new();
    }

    let mut drafts = Vec::new();
    for (name, body) in queues.iter_mapping() {
        let mut draft = FilterDraft {
            name,
            fields: Vec::new(),
        };

        for (key, value) in body.iter_mapping() {
            let values = if value.is_sequence() {
                list_from_node(value, Vec::new()).into_value()
            } else if let Some(raw) = value.as_scalar_string() {
                split_values(&raw)
            } else {
                warn!(queue = %draft.name, field = %key, "skipping field with an unusable value");
                continue;
            };
            draft.fields.push(FilterField { key, values });
        }

        drafts.push(draft);
    }
    drafts
}
