//! Quarterly report query assembly.
//!
//! [`QuarterlyReportQueryBuilder`] accumulates directives into a
//! [`QueryDescriptor`], which compiles to transport parameters.

mod builder;
mod descriptor;
mod filters;

pub use builder::{QuarterlyReportQueryBuilder, DEFAULT_REPORT_LIMIT};
pub use descriptor::{Conjunction, FilterCondition, FilterGroup, FilterOperator, QueryDescriptor};
pub use filters::FilterRuleResolver;

/// Resource type of quarterly report nodes.
pub const REPORT_TYPE: &str = "quarterly_foia_report";
/// Resource type of the per-component data paragraphs.
pub const COMPONENT_DATA_TYPE: &str = "paragraph--quarterly_component_data";

pub const AGENCY_PATH: &str = "field_agency.abbreviation";
pub const COMPONENT_PATH: &str = "field_quarterly_component_data.field_agency_component.abbreviation";
pub const FISCAL_YEAR_PATH: &str = "field_quarterly_year";
pub const QUARTER_PATH: &str = "field_quarterly_quarter";

/// Suffix of the agency-overall variant of a component field.
pub const OVERALL_SUFFIX: &str = "_oa";
