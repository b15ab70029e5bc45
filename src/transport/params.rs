//! JSON:API request parameters.
//!
//! Compiles includes, sparse fieldsets, filters and paging into the Drupal
//! JSON:API query grammar:
//!
//! ```text
//! include=a,b
//! fields[type]=x,y
//! filter[key][condition][path]=field
//! filter[key][condition][value]=v
//! filter[key][condition][operator]=<=
//! filter[key][condition][memberOf]=group
//! filter[group][group][conjunction]=OR
//! page[limit]=5
//! ```

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterEntry {
    Condition {
        path: String,
        value: String,
        operator: Option<String>,
        member_of: Option<String>,
    },
    Group {
        conjunction: String,
        member_of: Option<String>,
    },
}

/// Mutable request parameter builder handed to a [`Transport`](super::Transport).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    includes: Vec<String>,
    fields: IndexMap<String, Vec<String>>,
    filters: IndexMap<String, FilterEntry>,
    limit: Option<usize>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        if !self.includes.contains(&path) {
            self.includes.push(path);
        }
        self
    }

    /// Sparse fieldset for `resource_type`. Repeated calls extend the set.
    pub fn fields<I, S>(&mut self, resource_type: impl Into<String>, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.fields.entry(resource_type.into()).or_default();
        for name in names {
            let name = name.into();
            if !entry.contains(&name) {
                entry.push(name);
            }
        }
        self
    }

    pub fn filter(
        &mut self,
        key: impl Into<String>,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.filters.insert(
            key.into(),
            FilterEntry::Condition {
                path: path.into(),
                value: value.into(),
                operator: None,
                member_of: None,
            },
        );
        self
    }

    /// Set the comparison operator of an existing condition.
    pub fn operator(&mut self, key: &str, op: impl Into<String>) -> &mut Self {
        if let Some(FilterEntry::Condition { operator, .. }) = self.filters.get_mut(key) {
            *operator = Some(op.into());
        }
        self
    }

    /// Declare a filter group combining its members with `conjunction`.
    pub fn group(&mut self, key: impl Into<String>, conjunction: impl Into<String>) -> &mut Self {
        self.filters.insert(
            key.into(),
            FilterEntry::Group {
                conjunction: conjunction.into(),
                member_of: None,
            },
        );
        self
    }

    /// Attach a condition or group to a parent group.
    pub fn condition_group(&mut self, key: &str, group: impl Into<String>) -> &mut Self {
        match self.filters.get_mut(key) {
            Some(FilterEntry::Condition { member_of, .. })
            | Some(FilterEntry::Group { member_of, .. }) => {
                *member_of = Some(group.into());
            }
            None => {}
        }
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit = Some(n);
        self
    }

    pub fn page_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
            && self.fields.is_empty()
            && self.filters.is_empty()
            && self.limit.is_none()
    }

    /// Compile to query string pairs, in insertion order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if !self.includes.is_empty() {
            pairs.push(("include".to_string(), self.includes.join(",")));
        }

        for (resource_type, names) in &self.fields {
            pairs.push((format!("fields[{}]", resource_type), names.join(",")));
        }

        for (key, entry) in &self.filters {
            match entry {
                FilterEntry::Condition {
                    path,
                    value,
                    operator,
                    member_of,
                } => {
                    pairs.push((format!("filter[{}][condition][path]", key), path.clone()));
                    if !is_null_check(operator.as_deref()) {
                        pairs.push((format!("filter[{}][condition][value]", key), value.clone()));
                    }
                    if let Some(op) = operator {
                        pairs.push((format!("filter[{}][condition][operator]", key), op.clone()));
                    }
                    if let Some(group) = member_of {
                        pairs.push((
                            format!("filter[{}][condition][memberOf]", key),
                            group.clone(),
                        ));
                    }
                }
                FilterEntry::Group {
                    conjunction,
                    member_of,
                } => {
                    pairs.push((
                        format!("filter[{}][group][conjunction]", key),
                        conjunction.clone(),
                    ));
                    if let Some(group) = member_of {
                        pairs.push((format!("filter[{}][group][memberOf]", key), group.clone()));
                    }
                }
            }
        }

        if let Some(limit) = self.limit {
            pairs.push(("page[limit]".to_string(), limit.to_string()));
        }

        pairs
    }
}

fn is_null_check(operator: Option<&str>) -> bool {
    matches!(operator, Some("IS NULL") | Some("IS NOT NULL"))
}
