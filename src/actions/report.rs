use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::error::ActionError;
use super::handle::FetchHandle;
use super::source::DataTypeSource;
use crate::config::{ReportConfig, MAX_PAGE_LIMIT};
use crate::flux::{Action, Dispatcher};
use crate::query::{FilterRuleResolver, QuarterlyReportQueryBuilder};
use crate::stores::form::FormState;
use crate::stores::FormStore;
use crate::transport::{paginate, PageSummary, RequestParams, Resource, Transport, TransportError};
use crate::types::{DataTypeSelection, SelectionEntry, SubmissionAction, ViewMode};

const AGENCY_COMPONENTS_PATH: &str = "/agency_components";
const FISCAL_YEARS_PATH: &str = "/quarterly_foia_report/fiscal_years";
const QUARTERLY_REPORT_PATH: &str = "/quarterly_foia_report";

/// Sparse fieldsets for the agency finder. Every type except the primary
/// one is also included.
const REFERENCE_FIELDS: [(&str, &[&str]); 3] = [
    (
        "agency_component",
        &["title", "abbreviation", "agency", "field_rep_start"],
    ),
    ("agency", &["name", "abbreviation", "description", "category"]),
    ("agency.category", &["name"]),
];

/// Relationships loaded with a single agency component.
const COMPONENT_INCLUDES: [&str; 7] = [
    "agency",
    "field_misc",
    "foia_officers",
    "paper_receiver",
    "public_liaisons",
    "request_form",
    "service_centers",
];

/// Entry point for everything that changes report state.
///
/// Fetch operations dispatch their start event before returning and run the
/// network work on spawned Tokio tasks, so they must be called from within a
/// runtime. Selection operations dispatch synchronously.
#[derive(Clone)]
pub struct ReportActions {
    dispatcher: Arc<Dispatcher>,
    transport: Arc<dyn Transport>,
    data_types: Arc<dyn DataTypeSource>,
    form: Arc<FormStore>,
    filters: Arc<FilterRuleResolver>,
    config: ReportConfig,
    /// Last issued report request id, shared by clones.
    report_requests: Arc<AtomicU64>,
}

impl ReportActions {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        transport: Arc<dyn Transport>,
        data_types: Arc<dyn DataTypeSource>,
        form: Arc<FormStore>,
        config: ReportConfig,
    ) -> Self {
        Self {
            dispatcher,
            transport,
            data_types,
            form,
            filters: Arc::new(FilterRuleResolver::default()),
            config,
            report_requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the data type filter rules.
    pub fn with_filters(mut self, filters: FilterRuleResolver) -> Self {
        self.filters = Arc::new(filters);
        self
    }

    fn dispatch(&self, action: Action) {
        tracing::trace!(kind = action.kind(), "Dispatching");
        self.dispatcher.dispatch(&action);
    }

    // --- Reference data -------------------------------------------------

    /// Load the data type catalog.
    pub fn fetch_data_types(&self) -> FetchHandle<usize> {
        self.dispatch(Action::DataTypesFetch);

        let dispatcher = Arc::clone(&self.dispatcher);
        let source = Arc::clone(&self.data_types);
        FetchHandle::spawn("data_types", async move {
            let data_types = source.load().await.inspect_err(|e| {
                tracing::warn!(error = %e, error_type = e.error_type(), "Data type catalog failed");
            })?;
            let count = data_types.len();

            dispatcher.dispatch(&Action::DataTypesReceive { data_types });
            dispatcher.dispatch(&Action::DataTypesComplete);
            tracing::debug!(count, "Loaded data type catalog");
            Ok(count)
        })
    }

    /// Load every agency component whose reporting started on or before
    /// today, with its agency.
    pub fn fetch_agency_finder_data(&self) -> FetchHandle<PageSummary> {
        self.dispatch(Action::AgencyFinderDataFetch);

        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let mut params = RequestParams::new();
        for (resource_type, fields) in REFERENCE_FIELDS {
            if resource_type != "agency_component" {
                params.include(resource_type);
            }
            params.fields(resource_type, fields.iter().copied());
        }
        params
            .filter("rep_start", "field_rep_start", today)
            .operator("rep_start", "<=")
            .limit(self.config.reference_limit.min(MAX_PAGE_LIMIT));

        let dispatcher = Arc::clone(&self.dispatcher);
        let transport = Arc::clone(&self.transport);
        FetchHandle::spawn("agency_finder", async move {
            let summary = paginate(transport.as_ref(), AGENCY_COMPONENTS_PATH, &params, |page| {
                dispatcher.dispatch(&Action::AgencyFinderDataReceive {
                    agency_components: page,
                })
            })
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    error_type = e.error_type(),
                    "Agency finder fetch failed"
                );
            })?;

            dispatcher.dispatch(&Action::AgencyFinderDataComplete);
            Ok(summary)
        })
    }

    /// Load one agency component with its related records.
    ///
    /// An empty id is rejected before anything is dispatched.
    pub fn fetch_agency_component(
        &self,
        agency_component_id: &str,
    ) -> Result<FetchHandle<Resource>, ActionError> {
        if agency_component_id.trim().is_empty() {
            return Err(ActionError::InvalidInvocation(
                "an agency component id is required to fetch an agency component".to_string(),
            ));
        }

        self.dispatch(Action::AgencyComponentFetch {
            agency_component_id: agency_component_id.to_string(),
        });

        let mut params = RequestParams::new();
        for include in COMPONENT_INCLUDES {
            params.include(include);
        }
        let path = format!("{}/{}", AGENCY_COMPONENTS_PATH, agency_component_id);

        let dispatcher = Arc::clone(&self.dispatcher);
        let transport = Arc::clone(&self.transport);
        Ok(FetchHandle::spawn(agency_component_id, async move {
            let document = transport.get_document(&path, &params).await?;
            let agency_component = document.into_single().ok_or_else(|| {
                TransportError::Decode(format!("no agency component in response for '{}'", path))
            })?;

            dispatcher.dispatch(&Action::AgencyComponentReceive {
                agency_component: agency_component.clone(),
            });
            Ok(agency_component)
        }))
    }

    /// Load the fiscal years that have quarterly reports.
    pub fn fetch_fiscal_years(&self) -> FetchHandle<usize> {
        self.dispatch(Action::FiscalYearsFetch);

        let dispatcher = Arc::clone(&self.dispatcher);
        let transport = Arc::clone(&self.transport);
        FetchHandle::spawn("fiscal_years", async move {
            let body = transport
                .get(FISCAL_YEARS_PATH, &RequestParams::default())
                .await
                .inspect_err(|e| {
                    tracing::warn!(
                        error = %e,
                        error_type = e.error_type(),
                        "Fiscal years fetch failed"
                    );
                })?;
            let fiscal_years = fiscal_years_from(body);
            let count = fiscal_years.len();

            dispatcher.dispatch(&Action::FiscalYearsReceive { fiscal_years });
            dispatcher.dispatch(&Action::FiscalYearsComplete);
            Ok(count)
        })
    }

    // --- Report data ----------------------------------------------------

    /// Fetch report rows for the selected data types.
    ///
    /// Blank rows are dropped and rows sharing a data type id are merged
    /// into one fetch group. One `QuarterlyReportDataFetch` announces the
    /// group count, then each group paginates on its own task and finishes
    /// with a `QuarterlyReportDataComplete` carrying its type id. A failing
    /// group dispatches nothing further and reports through its handle;
    /// the other groups are unaffected.
    pub fn fetch_quarterly_report_data(
        &self,
        data_types: &[DataTypeSelection],
    ) -> Vec<FetchHandle<PageSummary>> {
        let groups = group_by_type(FormState::valid_data_types(data_types));
        let request_id = self.report_requests.fetch_add(1, Ordering::Relaxed) + 1;
        self.dispatch(Action::QuarterlyReportDataFetch {
            request_id,
            types_count: groups.len(),
        });

        groups
            .into_iter()
            .map(|(type_id, types)| {
                let builder = QuarterlyReportQueryBuilder::new().limit(self.config.report_limit);
                let params = self
                    .build_request_for_selected_type(&types, builder)
                    .build()
                    .to_params();

                let dispatcher = Arc::clone(&self.dispatcher);
                let transport = Arc::clone(&self.transport);
                let label = type_id.clone();
                FetchHandle::spawn(label, async move {
                    let summary =
                        paginate(transport.as_ref(), QUARTERLY_REPORT_PATH, &params, |page| {
                            dispatcher.dispatch(&Action::QuarterlyReportDataReceive {
                                request_id,
                                quarterly_reports: page,
                            })
                        })
                        .await
                        .inspect_err(|e| {
                            tracing::warn!(
                                type_id = %type_id,
                                request_id,
                                error = %e,
                                error_type = e.error_type(),
                                "Report data group failed"
                            );
                        })?;

                    tracing::debug!(
                        type_id = %type_id,
                        request_id,
                        pages = summary.pages,
                        items = summary.items,
                        "Report data group complete"
                    );
                    dispatcher.dispatch(&Action::QuarterlyReportDataComplete {
                        request_id,
                        type_id,
                    });
                    Ok(summary)
                })
            })
            .collect()
    }

    /// Apply the current form selections to `builder` for one data type
    /// group. Every entry of `types` shares the same id.
    pub fn build_request_for_selected_type(
        &self,
        types: &[DataTypeSelection],
        mut builder: QuarterlyReportQueryBuilder,
    ) -> QuarterlyReportQueryBuilder {
        let form = self.form.get_state();
        let Some(type_id) = types.first().map(|t| t.id.as_str()) else {
            return builder;
        };

        if form.include_overall() {
            builder = builder.include_overall_fields(types);
        }
        if !form.all_agencies_selected {
            let (agencies, components) = form.organization_filters();
            builder = builder
                .include_data_types(types)
                .add_organizations_group(&agencies, &components);
        }

        builder
            .add_data_type_filters_group(&self.filters.resolve(type_id), type_id)
            .add_fiscal_years_group(&form.selected_fiscal_years)
            .add_quarters_group(&form.selected_quarters)
    }

    // --- Form selections ------------------------------------------------

    pub fn append_blank_agency(&self) {
        self.dispatch(Action::SelectedAgenciesAppendBlank);
    }

    pub fn update_selected_agency(&self, index: usize, selection: SelectionEntry) {
        self.dispatch(Action::SelectedAgenciesUpdate { index, selection });
    }

    pub fn toggle_select_all_agencies(&self) {
        self.dispatch(Action::SelectedAgenciesToggleSelectAll);
    }

    pub fn remove_agency_component(&self, index: usize) {
        self.dispatch(Action::AgencyComponentRemove { index });
    }

    pub fn update_component_temporary(&self, index: usize, component_index: usize, selected: bool) {
        self.dispatch(Action::ComponentTemporaryUpdate {
            index,
            component_index,
            selected,
        });
    }

    pub fn update_all_components_temporary(&self, index: usize, selected: bool) {
        self.dispatch(Action::ComponentTemporaryUpdateAll { index, selected });
    }

    pub fn discard_temporary_components(&self) {
        self.dispatch(Action::ComponentsDiscardTemporary);
    }

    pub fn merge_temporary_components(&self) {
        self.dispatch(Action::ComponentsMergeTemporary);
    }

    pub fn append_blank_data_type(&self) {
        self.dispatch(Action::DataTypeAppendBlank);
    }

    pub fn update_data_type(&self, index: usize, data_type: DataTypeSelection) {
        self.dispatch(Action::DataTypeUpdate { index, data_type });
    }

    pub fn remove_data_type(&self, index: usize) {
        self.dispatch(Action::DataTypeFieldRemove { index });
    }

    pub fn update_selected_fiscal_years(&self, fiscal_years: Vec<String>) {
        self.dispatch(Action::SelectedFiscalYearsUpdate { fiscal_years });
    }

    pub fn update_selected_quarters(&self, quarters: Vec<String>) {
        self.dispatch(Action::SelectedQuartersUpdate { quarters });
    }

    pub fn validate_form(&self) {
        self.dispatch(Action::ValidateForm);
    }

    pub fn set_submission_type(&self, submission_action: SubmissionAction) {
        self.dispatch(Action::ReportSubmissionType { submission_action });
    }

    /// Reset the form and drop any report rows, including rows still in
    /// flight.
    pub fn clear_form(&self) {
        self.dispatch(Action::ClearForm);
    }

    pub fn reload_form(&self, view_mode: ViewMode) {
        self.dispatch(Action::ReloadForm { view_mode });
    }
}

/// Partition rows by id, keeping first-seen order.
fn group_by_type(types: Vec<DataTypeSelection>) -> IndexMap<String, Vec<DataTypeSelection>> {
    let mut groups: IndexMap<String, Vec<DataTypeSelection>> = IndexMap::new();
    for data_type in types {
        groups.entry(data_type.id.clone()).or_default().push(data_type);
    }
    groups
}

/// The fiscal years endpoint answers with a bare JSON array.
fn fiscal_years_from(body: Value) -> Vec<String> {
    let Value::Array(items) = body else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(year) => Some(year),
            Value::Number(year) => Some(year.to_string()),
            _ => None,
        })
        .collect()
}
