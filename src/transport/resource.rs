//! JSON:API documents and resource objects.
//!
//! This is the network boundary: every shape check on server data happens
//! here, so the rest of the crate works with typed values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::TransportError;

/// A JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: Map<String, Value>,
}

impl Resource {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String attribute, `None` when missing or not a string.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    /// Id of the single related resource for `name`.
    pub fn related_id(&self, name: &str) -> Option<&str> {
        self.relationships
            .get(name)
            .and_then(|rel| rel.get("data"))
            .and_then(|data| data.get("id"))
            .and_then(Value::as_str)
    }

    /// The single related resource for `name`.
    ///
    /// Carries attributes only when the document included it.
    pub fn related(&self, name: &str) -> Option<Resource> {
        let data = self.relationships.get(name)?.get("data")?;
        serde_json::from_value(data.clone()).ok()
    }
}

/// One page of a JSON:API response.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub data: Vec<Resource>,
    pub included: Vec<Resource>,
    pub next: Option<String>,
    /// Entries in the server's `data` member, counting ones that were dropped.
    pub raw_len: usize,
}

impl Document {
    /// Parse a JSON:API response body.
    ///
    /// `data` may be a single object or an array. Entries that are not
    /// resource objects are dropped.
    pub fn from_value(value: Value) -> Result<Self, TransportError> {
        let Value::Object(mut root) = value else {
            return Err(TransportError::Decode(
                "response body is not a JSON object".to_string(),
            ));
        };

        let (data, raw_len) = match root.remove("data") {
            Some(Value::Array(items)) => {
                let raw_len = items.len();
                (parse_resources(items), raw_len)
            }
            Some(item @ Value::Object(_)) => (parse_resources(vec![item]), 1),
            Some(Value::Null) | None => (Vec::new(), 0),
            Some(other) => {
                return Err(TransportError::Decode(format!(
                    "unexpected `data` member: {}",
                    other
                )))
            }
        };

        let included = match root.remove("included") {
            Some(Value::Array(items)) => parse_resources(items),
            _ => Vec::new(),
        };

        let next = root
            .get("links")
            .and_then(|links| links.get("next"))
            .and_then(|next| match next {
                Value::String(href) => Some(href.clone()),
                Value::Object(link) => link.get("href").and_then(Value::as_str).map(String::from),
                _ => None,
            });

        Ok(Self {
            data,
            included,
            next,
            raw_len,
        })
    }

    /// The single primary resource of a document, if any.
    pub fn into_single(self) -> Option<Resource> {
        self.into_resolved_data().into_iter().next()
    }

    /// Primary data with relationship identifiers replaced by the matching
    /// `included` resources, one level deep.
    pub fn into_resolved_data(self) -> Vec<Resource> {
        if self.included.is_empty() {
            return self.data;
        }

        let included: HashMap<(String, String), Value> = self
            .included
            .into_iter()
            .filter_map(|resource| {
                let key = (resource.resource_type.clone(), resource.id.clone());
                serde_json::to_value(resource).ok().map(|value| (key, value))
            })
            .collect();

        self.data
            .into_iter()
            .map(|mut resource| {
                for relationship in resource.relationships.values_mut() {
                    if let Some(data) = relationship.get_mut("data") {
                        resolve_linkage(data, &included);
                    }
                }
                resource
            })
            .collect()
    }
}

fn resolve_linkage(data: &mut Value, included: &HashMap<(String, String), Value>) {
    match data {
        Value::Array(items) => {
            for item in items {
                resolve_linkage(item, included);
            }
        }
        Value::Object(identifier) => {
            let key = match (
                identifier.get("type").and_then(Value::as_str),
                identifier.get("id").and_then(Value::as_str),
            ) {
                (Some(t), Some(id)) => (t.to_string(), id.to_string()),
                _ => return,
            };
            if let Some(full) = included.get(&key) {
                *data = full.clone();
            }
        }
        _ => {}
    }
}

fn parse_resources(items: Vec<Value>) -> Vec<Resource> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Resource>(item) {
            Ok(resource) if !resource.resource_type.is_empty() => Some(resource),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed resource object");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_collection_with_next_link() {
        let doc = Document::from_value(json!({
            "data": [
                {"id": "1", "type": "quarterly_foia_report", "attributes": {"title": "Q1"}},
                {"id": "2", "type": "quarterly_foia_report", "attributes": {"title": "Q2"}}
            ],
            "links": {"next": {"href": "https://api.example/quarterly_foia_report?page[offset]=2"}}
        }))
        .unwrap();

        assert_eq!(doc.data.len(), 2);
        assert_eq!(doc.data[1].attr_str("title"), Some("Q2"));
        assert_eq!(
            doc.next.as_deref(),
            Some("https://api.example/quarterly_foia_report?page[offset]=2")
        );
    }

    #[test]
    fn parses_single_resource() {
        let doc = Document::from_value(json!({
            "data": {
                "id": "abc",
                "type": "agency_component",
                "attributes": {"abbreviation": "FBI"},
                "relationships": {"agency": {"data": {"type": "agency", "id": "doj"}}}
            }
        }))
        .unwrap();

        let resource = doc.into_single().unwrap();
        assert_eq!(resource.attr_str("abbreviation"), Some("FBI"));
        assert_eq!(resource.related_id("agency"), Some("doj"));
    }

    #[test]
    fn drops_entries_without_type() {
        let doc = Document::from_value(json!({
            "data": [{"id": "1"}, "garbage", {"id": "2", "type": "agency"}]
        }))
        .unwrap();
        assert_eq!(doc.data.len(), 1);
        assert_eq!(doc.raw_len, 3);
        assert_eq!(doc.data[0].id, "2");
        assert!(doc.next.is_none());
    }

    #[test]
    fn resolves_included_relationships() {
        let doc = Document::from_value(json!({
            "data": [{
                "id": "c1",
                "type": "agency_component",
                "attributes": {"abbreviation": "FBI"},
                "relationships": {"agency": {"data": {"type": "agency", "id": "doj"}}}
            }],
            "included": [{
                "id": "doj",
                "type": "agency",
                "attributes": {"name": "Department of Justice", "abbreviation": "DOJ"}
            }]
        }))
        .unwrap();

        let data = doc.into_resolved_data();
        let agency = data[0].related("agency").unwrap();
        assert_eq!(agency.id, "doj");
        assert_eq!(agency.attr_str("abbreviation"), Some("DOJ"));
    }

    #[test]
    fn rejects_non_object_body() {
        assert!(Document::from_value(json!([1, 2, 3])).is_err());
    }
}
