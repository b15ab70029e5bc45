//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use foia_report::actions::StaticDataTypeSource;
use foia_report::config::Config;
use foia_report::context::AppContext;
use foia_report::flux::{Action, Dispatcher};
use foia_report::transport::{RequestParams, Transport, TransportError};
use foia_report::types::{DataTypeDescriptor, DataTypeSelection};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the request declares filter group `key`.
    pub fn has_group(&self, key: &str) -> bool {
        let name = format!("filter[{}][group][conjunction]", key);
        self.query.iter().any(|(k, _)| *k == name)
    }

    /// Whether any query value equals `value`.
    pub fn mentions(&self, value: &str) -> bool {
        self.query.iter().any(|(_, v)| v == value)
    }
}

type Matcher = Box<dyn Fn(&RecordedRequest) -> bool + Send + Sync>;

struct Rule {
    matcher: Matcher,
    responses: VecDeque<Result<Value, u16>>,
    delay: Duration,
}

/// In-memory [`Transport`] answering from scripted rules.
///
/// The first rule whose matcher accepts a request and still has responses
/// left answers it. `Err(status)` entries become HTTP status errors.
#[derive(Default)]
pub struct ScriptedTransport {
    rules: Mutex<Vec<Rule>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(self, matcher: F, responses: Vec<Result<Value, u16>>) -> Self
    where
        F: Fn(&RecordedRequest) -> bool + Send + Sync + 'static,
    {
        self.rules.lock().push(Rule {
            matcher: Box::new(matcher),
            responses: responses.into(),
            delay: Duration::ZERO,
        });
        self
    }

    /// Like [`on`](Self::on), answering each request after `delay`.
    pub fn on_delayed<F>(
        self,
        matcher: F,
        responses: Vec<Result<Value, u16>>,
        delay: Duration,
    ) -> Self
    where
        F: Fn(&RecordedRequest) -> bool + Send + Sync + 'static,
    {
        self.rules.lock().push(Rule {
            matcher: Box::new(matcher),
            responses: responses.into(),
            delay,
        });
        self
    }

    /// Answer every request for exactly `path`.
    pub fn on_path(self, path: &str, responses: Vec<Result<Value, u16>>) -> Self {
        let path = path.to_string();
        self.on(move |request| request.path == path, responses)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value, TransportError> {
        let request = RecordedRequest {
            path: path.to_string(),
            query: params.to_query_pairs(),
        };
        self.requests.lock().push(request.clone());

        let answer = {
            let mut rules = self.rules.lock();
            rules
                .iter_mut()
                .find(|rule| !rule.responses.is_empty() && (rule.matcher)(&request))
                .and_then(|rule| rule.responses.pop_front().map(|r| (r, rule.delay)))
        };

        let Some((response, delay)) = answer else {
            return Err(TransportError::Status {
                status: 404,
                url: path.to_string(),
            });
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response.map_err(|status| TransportError::Status {
            status,
            url: path.to_string(),
        })
    }
}

/// One JSON:API page of `items`, linking to `next` when given.
pub fn page(items: Vec<Value>, next: Option<&str>) -> Value {
    match next {
        Some(href) => json!({ "data": items, "links": { "next": { "href": href } } }),
        None => json!({ "data": items }),
    }
}

pub fn report(id: &str) -> Value {
    json!({
        "id": id,
        "type": "quarterly_foia_report",
        "attributes": { "title": format!("Report {}", id) }
    })
}

pub fn agency_component(id: &str, abbreviation: &str, agency_id: &str) -> Value {
    json!({
        "id": id,
        "type": "agency_component",
        "attributes": { "title": format!("{} component", abbreviation), "abbreviation": abbreviation },
        "relationships": { "agency": { "data": { "type": "agency", "id": agency_id } } }
    })
}

pub fn agency(id: &str, abbreviation: &str, name: &str) -> Value {
    json!({
        "id": id,
        "type": "agency",
        "attributes": { "abbreviation": abbreviation, "name": name }
    })
}

pub fn descriptor(id: &str, field: &str) -> DataTypeDescriptor {
    DataTypeDescriptor {
        id: id.to_string(),
        label: id.replace('_', " "),
        pretty: String::new(),
        fields: vec![field.to_string()],
        includes: vec!["field_quarterly_component_data".to_string()],
    }
}

pub fn selection(id: &str, field: &str) -> DataTypeSelection {
    DataTypeSelection::from_descriptor(&descriptor(id, field))
}

pub fn catalog() -> Vec<DataTypeDescriptor> {
    vec![
        descriptor("requests_received", "field_request_received"),
        descriptor("requests_processed", "field_request_processed"),
        descriptor("requests_backlogged", "field_backlogged"),
    ]
}

/// Context wired to `transport` and the test catalog.
pub fn context_with(transport: Arc<ScriptedTransport>) -> AppContext {
    context_with_config(transport, &Config::default())
}

pub fn context_with_config(transport: Arc<ScriptedTransport>, config: &Config) -> AppContext {
    AppContext::new(
        config,
        transport,
        Arc::new(StaticDataTypeSource::new(catalog())),
    )
}

/// Record the kind of every action dispatched from now on.
pub fn record_kinds(dispatcher: &Dispatcher) -> Arc<Mutex<Vec<String>>> {
    let kinds = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&kinds);
    dispatcher.subscribe(move |action: &Action| {
        let label = match action {
            Action::QuarterlyReportDataReceive {
                quarterly_reports, ..
            } => format!(
                "{}({})",
                action.kind(),
                quarterly_reports
                    .iter()
                    .map(|r| r.id.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            Action::QuarterlyReportDataComplete { type_id, .. } => {
                format!("{}({})", action.kind(), type_id)
            }
            _ => action.kind().to_string(),
        };
        sink.lock().push(label);
    });
    kinds
}
