//! Persistent builder for quarterly report queries.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::types::DataTypeSelection;

use super::descriptor::{FilterCondition, FilterGroup, QueryDescriptor};
use super::{
    AGENCY_PATH, COMPONENT_DATA_TYPE, COMPONENT_PATH, FISCAL_YEAR_PATH, OVERALL_SUFFIX,
    QUARTER_PATH, REPORT_TYPE,
};

/// Page size for report data requests.
pub const DEFAULT_REPORT_LIMIT: usize = 5;

const BASE_REPORT_FIELDS: [&str; 5] = [
    "title",
    "field_quarterly_year",
    "field_quarterly_quarter",
    "field_agency",
    "field_quarterly_component_data",
];
const AGENCY_FIELDS: [&str; 2] = ["name", "abbreviation"];
const COMPONENT_FIELDS: [&str; 2] = ["title", "abbreviation"];

/// Chainable, persistent query builder.
///
/// Every method consumes the builder and returns the updated one. Internals
/// are shared copy-on-write, so a clone taken mid-chain can diverge from
/// the original without either seeing the other's directives.
///
/// ```
/// use foia_report::query::QuarterlyReportQueryBuilder;
///
/// let common = QuarterlyReportQueryBuilder::new()
///     .add_fiscal_years_group(&["2021".to_string()]);
/// let q1 = common.clone().add_quarters_group(&["1".to_string()]).build();
/// let all = common.build();
///
/// assert!(q1.group("quarters").is_some());
/// assert!(all.group("quarters").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct QuarterlyReportQueryBuilder {
    groups: Arc<Vec<FilterGroup>>,
    includes: Arc<IndexSet<String>>,
    fields: Arc<IndexMap<String, IndexSet<String>>>,
    limit: usize,
}

impl Default for QuarterlyReportQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuarterlyReportQueryBuilder {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(Vec::new()),
            includes: Arc::new(IndexSet::new()),
            fields: Arc::new(IndexMap::new()),
            limit: DEFAULT_REPORT_LIMIT,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Request the agency-overall variant of every field of `types`.
    ///
    /// Used when a selected agency has its "overall" component checked.
    pub fn include_overall_fields(self, types: &[DataTypeSelection]) -> Self {
        let overall: Vec<String> = types
            .iter()
            .flat_map(|t| t.fields.iter())
            .map(|field| format!("{}{}", field, OVERALL_SUFFIX))
            .collect();

        self.with_includes(["field_agency"])
            .with_fields(REPORT_TYPE, BASE_REPORT_FIELDS)
            .with_fields(REPORT_TYPE, overall)
            .with_fields("agency", AGENCY_FIELDS)
    }

    /// Narrow the response to the component-level fields of `types`.
    ///
    /// Skipped when all agencies are selected, so that case fetches the
    /// broadest result set.
    pub fn include_data_types(self, types: &[DataTypeSelection]) -> Self {
        let includes: Vec<String> = types
            .iter()
            .flat_map(|t| t.includes.iter().cloned())
            .collect();
        let component_fields: Vec<String> = types
            .iter()
            .flat_map(|t| t.fields.iter().cloned())
            .collect();

        self.with_includes([
            "field_agency",
            "field_quarterly_component_data",
            "field_quarterly_component_data.field_agency_component",
        ])
        .with_includes(includes)
        .with_fields(REPORT_TYPE, BASE_REPORT_FIELDS)
        .with_fields(COMPONENT_DATA_TYPE, ["field_agency_component"])
        .with_fields(COMPONENT_DATA_TYPE, component_fields)
        .with_fields("agency", AGENCY_FIELDS)
        .with_fields("agency_component", COMPONENT_FIELDS)
    }

    /// Restrict to reports of the given agencies or components.
    ///
    /// Empty lists add no constraint.
    pub fn add_organizations_group(self, agencies: &[String], components: &[String]) -> Self {
        let conditions: Vec<FilterCondition> = agencies
            .iter()
            .map(|abbr| FilterCondition::eq(AGENCY_PATH, abbr.as_str()))
            .chain(
                components
                    .iter()
                    .map(|abbr| FilterCondition::eq(COMPONENT_PATH, abbr.as_str())),
            )
            .collect();

        self.with_group(FilterGroup::any("organizations", conditions))
    }

    /// Add the filter groups resolved for `type_id`.
    pub fn add_data_type_filters_group(self, filters: &[FilterGroup], type_id: &str) -> Self {
        filters.iter().fold(self, |builder, group| {
            let key = if group.key.is_empty() {
                type_id.to_string()
            } else {
                group.key.clone()
            };
            builder.with_group(FilterGroup {
                key,
                ..group.clone()
            })
        })
    }

    /// OR group over fiscal years. Empty means all years.
    pub fn add_fiscal_years_group(self, years: &[String]) -> Self {
        self.with_group(equality_group("fiscal_years", FISCAL_YEAR_PATH, years))
    }

    /// OR group over quarters. Empty means all quarters.
    pub fn add_quarters_group(self, quarters: &[String]) -> Self {
        self.with_group(equality_group("quarters", QUARTER_PATH, quarters))
    }

    pub fn build(&self) -> QueryDescriptor {
        QueryDescriptor {
            groups: self.groups.as_ref().clone(),
            includes: self.includes.iter().cloned().collect(),
            fields: self
                .fields
                .iter()
                .map(|(resource_type, names)| {
                    (resource_type.clone(), names.iter().cloned().collect())
                })
                .collect(),
            limit: self.limit,
        }
    }

    /// Empty groups are dropped; a group with an existing key replaces it.
    fn with_group(mut self, group: FilterGroup) -> Self {
        if group.conditions.is_empty() {
            return self;
        }
        let groups = Arc::make_mut(&mut self.groups);
        match groups.iter_mut().find(|g| g.key == group.key) {
            Some(existing) => *existing = group,
            None => groups.push(group),
        }
        self
    }

    fn with_includes<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let includes = Arc::make_mut(&mut self.includes);
        includes.extend(paths.into_iter().map(Into::<String>::into));
        self
    }

    fn with_fields<I, S>(mut self, resource_type: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = Arc::make_mut(&mut self.fields);
        fields
            .entry(resource_type.to_string())
            .or_default()
            .extend(names.into_iter().map(Into::<String>::into));
        self
    }
}

fn equality_group(key: &str, path: &str, values: &[String]) -> FilterGroup {
    FilterGroup::any(
        key,
        values
            .iter()
            .map(|value| FilterCondition::eq(path, value.as_str()))
            .collect(),
    )
}
