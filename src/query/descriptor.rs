//! Immutable query descriptor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::transport::RequestParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterOperator {
    #[default]
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    NotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "IS NULL")]
    IsNull,
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl FilterOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::NotEq => "<>",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "<=",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => ">=",
            FilterOperator::IsNull => "IS NULL",
            FilterOperator::IsNotNull => "IS NOT NULL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conjunction {
    And,
    #[default]
    Or,
}

impl Conjunction {
    pub fn as_str(self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub operator: FilterOperator,
}

impl FilterCondition {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            operator: FilterOperator::Eq,
        }
    }

    pub fn not_null(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: String::new(),
            operator: FilterOperator::IsNotNull,
        }
    }
}

/// Conditions joined by `conjunction`. Groups themselves are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    #[serde(default)]
    pub conjunction: Conjunction,
    pub conditions: Vec<FilterCondition>,
}

impl FilterGroup {
    pub fn any(key: impl Into<String>, conditions: Vec<FilterCondition>) -> Self {
        Self {
            key: key.into(),
            conjunction: Conjunction::Or,
            conditions,
        }
    }

    pub fn all(key: impl Into<String>, conditions: Vec<FilterCondition>) -> Self {
        Self {
            key: key.into(),
            conjunction: Conjunction::And,
            conditions,
        }
    }

    pub fn values(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.value.as_str()).collect()
    }
}

/// Fully assembled request description for one fetch group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub groups: Vec<FilterGroup>,
    pub includes: Vec<String>,
    pub fields: IndexMap<String, Vec<String>>,
    pub limit: usize,
}

impl QueryDescriptor {
    pub fn group(&self, key: &str) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    pub fn fields_for(&self, resource_type: &str) -> &[String] {
        self.fields
            .get(resource_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Compile to JSON:API parameters.
    ///
    /// Each group becomes a `group` entry and each condition a member keyed
    /// `<group>_<n>`; `=` is the server default and is omitted.
    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new();

        for include in &self.includes {
            params.include(include.as_str());
        }

        for (resource_type, names) in &self.fields {
            params.fields(resource_type.as_str(), names.iter().map(String::as_str));
        }

        for group in &self.groups {
            params.group(group.key.as_str(), group.conjunction.as_str());
            for (i, condition) in group.conditions.iter().enumerate() {
                let key = format!("{}_{}", group.key, i);
                params.filter(key.as_str(), condition.field.as_str(), condition.value.as_str());
                if condition.operator != FilterOperator::Eq {
                    params.operator(&key, condition.operator.as_str());
                }
                params.condition_group(&key, group.key.as_str());
            }
        }

        params.limit(self.limit);
        params
    }
}
