//! Catalog, agency finder, agency component and fiscal year fetches.

mod common;

use common::{
    agency, agency_component, context_with, context_with_config, page, record_kinds,
    ScriptedTransport,
};
use foia_report::actions::ActionError;
use foia_report::config::Config;
use foia_report::types::SelectionType;
use serde_json::json;
use std::sync::Arc;

fn doj_page() -> serde_json::Value {
    let mut body = page(
        vec![
            agency_component("c1", "FBI", "doj"),
            agency_component("c2", "OIP", "doj"),
            agency_component("c3", "FDA", "hhs"),
        ],
        None,
    );
    body["included"] = json!([
        agency("doj", "DOJ", "Department of Justice"),
        agency("hhs", "HHS", "Department of Health and Human Services"),
    ]);
    body
}

#[tokio::test]
async fn data_types_load_into_catalog_store() {
    let ctx = context_with(Arc::new(ScriptedTransport::new()));
    let kinds = record_kinds(&ctx.dispatcher);

    let count = ctx.actions.fetch_data_types().join().await.unwrap();
    assert_eq!(count, 3);

    let state = ctx.data_types.get_state();
    assert_eq!(state.data_type_options.len(), 3);
    assert_eq!(state.data_type_options[0].value, "requests_received");
    assert_eq!(
        state.fields_for("requests_backlogged"),
        &["field_backlogged".to_string()]
    );
    assert_eq!(
        *kinds.lock(),
        vec![
            "QUARTERLY_REPORT_DATA_TYPES_FETCH".to_string(),
            "QUARTERLY_REPORT_DATA_TYPES_RECEIVE".to_string(),
            "QUARTERLY_REPORT_DATA_TYPES_COMPLETE".to_string(),
        ]
    );
}

#[tokio::test]
async fn agency_finder_requests_reference_fields() {
    let transport =
        Arc::new(ScriptedTransport::new().on_path("/agency_components", vec![Ok(doj_page())]));
    let ctx = context_with(Arc::clone(&transport));

    let summary = ctx.actions.fetch_agency_finder_data().join().await.unwrap();
    assert_eq!(summary.items, 3);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.param("include"), Some("agency,agency.category"));
    assert_eq!(
        request.param("fields[agency_component]"),
        Some("title,abbreviation,agency,field_rep_start")
    );
    assert_eq!(
        request.param("filter[rep_start][condition][path]"),
        Some("field_rep_start")
    );
    assert_eq!(
        request.param("filter[rep_start][condition][operator]"),
        Some("<=")
    );
    assert_eq!(request.param("page[limit]"), Some("50"));
}

#[tokio::test]
async fn agency_finder_store_indexes_agencies() {
    let transport =
        Arc::new(ScriptedTransport::new().on_path("/agency_components", vec![Ok(doj_page())]));
    let ctx = context_with(transport);

    ctx.actions.fetch_agency_finder_data().join().await.unwrap();

    let state = ctx.agency_finder.get_state();
    assert!(state.is_complete);
    assert_eq!(state.agencies.len(), 2);
    assert_eq!(state.finder_options.len(), 5);
    assert_eq!(state.finder_options[0].label, "Department of Health and Human Services");
    assert_eq!(state.finder_options[0].selection_type, SelectionType::Agency);

    let doj = state.selection_for_agency("DOJ").unwrap();
    assert_eq!(doj.components.len(), 3);
    assert!(doj.has_overall_selected());
}

#[tokio::test]
async fn reference_limit_is_capped_by_config() {
    let transport = Arc::new(
        ScriptedTransport::new().on_path("/agency_components", vec![Ok(page(vec![], None))]),
    );
    let mut config = Config::default();
    config.report.reference_limit = 10;
    let ctx = context_with_config(Arc::clone(&transport), &config);

    ctx.actions.fetch_agency_finder_data().join().await.unwrap();
    assert_eq!(transport.requests()[0].param("page[limit]"), Some("10"));
}

#[tokio::test]
async fn empty_component_id_dispatches_nothing() {
    let transport = Arc::new(ScriptedTransport::new());
    let ctx = context_with(Arc::clone(&transport));
    let kinds = record_kinds(&ctx.dispatcher);

    let result = ctx.actions.fetch_agency_component("");
    assert!(matches!(result, Err(ActionError::InvalidInvocation(_))));
    assert!(kinds.lock().is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn agency_component_detail_is_stored() {
    let transport = Arc::new(ScriptedTransport::new().on_path(
        "/agency_components/c1",
        vec![Ok(json!({ "data": agency_component("c1", "FBI", "doj") }))],
    ));
    let ctx = context_with(Arc::clone(&transport));

    let resource = ctx
        .actions
        .fetch_agency_component("c1")
        .unwrap()
        .join()
        .await
        .unwrap();
    assert_eq!(resource.attr_str("abbreviation"), Some("FBI"));

    let request = &transport.requests()[0];
    assert!(request.param("include").unwrap().starts_with("agency,field_misc"));

    let state = ctx.agency_finder.get_state();
    assert_eq!(state.requested_component_id.as_deref(), Some("c1"));
    assert_eq!(state.agency_component.as_ref().map(|r| r.id.as_str()), Some("c1"));
}

#[tokio::test]
async fn fiscal_years_become_descending_options() {
    let transport = Arc::new(ScriptedTransport::new().on_path(
        "/quarterly_foia_report/fiscal_years",
        vec![Ok(json!(["2019", "2021", "2020"]))],
    ));
    let ctx = context_with(transport);

    assert_eq!(ctx.actions.fetch_fiscal_years().join().await.unwrap(), 3);

    let state = ctx.fiscal_years.get_state();
    let values: Vec<&str> = state
        .fiscal_year_options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, vec!["2021", "2020", "2019"]);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn fiscal_years_failure_surfaces_through_handle() {
    let transport = Arc::new(
        ScriptedTransport::new().on_path("/quarterly_foia_report/fiscal_years", vec![Err(503)]),
    );
    let ctx = context_with(transport);
    let kinds = record_kinds(&ctx.dispatcher);

    let err = ctx.actions.fetch_fiscal_years().join().await.unwrap_err();
    assert_eq!(err.error_type(), "status_error");
    assert_eq!(
        *kinds.lock(),
        vec!["QUARTERLY_REPORT_FISCAL_YEARS_FETCH".to_string()]
    );
    assert!(ctx.fiscal_years.get_state().is_loading);
}
