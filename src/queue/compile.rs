//! Compiling drafts into queue filters.

use super::filter::{FilterMatch, FilterProperty, MatchRule, QueueFilter};
use super::source::{FilterDraft, FilterField, drafts_from_legacy, drafts_from_yaml};
use crate::yaml::YamlNode;
use tracing::{debug, warn};

/// Build the queue filters defined in legacy configuration text.
///
/// `locked` is applied to every produced filter. Entries that cannot be
/// understood are skipped; the rest of the list is still built.
pub fn parse_queue_list(content: &str, locked: bool) -> Vec<QueueFilter> {
    compile_filters(drafts_from_legacy(content), locked)
}

/// Build the queue filters defined in a YAML configuration document.
pub fn parse_queue_list_yaml<N: YamlNode>(node: &N, locked: bool) -> Vec<QueueFilter> {
    compile_filters(drafts_from_yaml(node), locked)
}

pub(crate) fn compile_filters(drafts: Vec<FilterDraft>, locked: bool) -> Vec<QueueFilter> {
    let mut filters = Vec::with_capacity(drafts.len());
    for draft in drafts {
        if draft.name.is_empty() {
            warn!("skipping queue filter without a name");
            continue;
        }
        let rules = draft.fields.iter().filter_map(compile_rule).collect();
        filters.push(QueueFilter::new(draft.name, rules, locked));
    }
    debug!(count = filters.len(), locked, "compiled queue filters");
    filters
}

fn compile_rule(field: &FilterField) -> Option<MatchRule> {
    let key = field.key.to_ascii_lowercase();
    match key.as_str() {
        "filter-namespaces" => {
            let namespaces: Vec<i32> = field
                .values
                .iter()
                .filter_map(|value| match value.parse() {
                    Ok(namespace) => Some(namespace),
                    Err(_) => {
                        warn!(value = %value, "skipping namespace that is not a number");
                        None
                    }
                })
                .collect();
            if namespaces.is_empty() {
                return None;
            }
            Some(MatchRule::Namespaces { namespaces })
        }
        "required-tags" | "ignored-tags" if field.values.is_empty() => {
            debug!(field = %field.key, "skipping empty tag list");
            None
        }
        "required-tags" => Some(MatchRule::RequiredTags {
            tags: field.values.clone(),
        }),
        "ignored-tags" => Some(MatchRule::IgnoredTags {
            tags: field.values.clone(),
        }),
        _ => {
            let Some(property) = FilterProperty::from_key(&key) else {
                warn!(field = %field.key, "skipping unknown queue filter field");
                return None;
            };
            let value = field.values.first().map(String::as_str).unwrap_or_default();
            let Some(mode) = FilterMatch::from_str(value) else {
                warn!(field = %field.key, value = %value, "skipping queue filter field with an invalid mode");
                return None;
            };
            Some(MatchRule::Property { property, mode })
        }
    }
}
