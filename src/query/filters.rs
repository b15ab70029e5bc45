//! Static filter rules per report data type.

use std::collections::HashMap;

use super::descriptor::{FilterCondition, FilterGroup};

/// Built-in rules: only return reports whose component data carries a value
/// for the type's headline field.
const BUILTIN_RULES: [(&str, &str); 6] = [
    ("requests_received", "field_request_received"),
    ("requests_processed", "field_request_processed"),
    ("requests_backlogged", "field_backlogged"),
    ("requests_pending", "field_request_pending"),
    ("simple_median_days", "field_simple_median_days"),
    ("complex_median_days", "field_complex_median_days"),
];

/// Maps a data type id to the filter groups it always applies.
///
/// Pure lookup: no I/O, and the same id always yields the same groups.
#[derive(Debug, Clone)]
pub struct FilterRuleResolver {
    rules: HashMap<String, Vec<FilterGroup>>,
}

impl Default for FilterRuleResolver {
    fn default() -> Self {
        Self::from_rules(BUILTIN_RULES.iter().map(|(type_id, field)| {
            (
                type_id.to_string(),
                vec![FilterGroup::all(
                    *type_id,
                    vec![FilterCondition::not_null(format!(
                        "field_quarterly_component_data.{}",
                        field
                    ))],
                )],
            )
        }))
    }
}

impl FilterRuleResolver {
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<FilterGroup>)>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Filter groups for `type_id`; unknown ids have none.
    pub fn resolve(&self, type_id: &str) -> Vec<FilterGroup> {
        self.rules.get(type_id).cloned().unwrap_or_default()
    }
}
