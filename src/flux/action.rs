//! The closed set of actions flowing through the dispatcher.

use crate::transport::Resource;
use crate::types::{
    DataTypeDescriptor, DataTypeSelection, SelectionEntry, SubmissionAction, ViewMode,
};

/// Every event a store can react to.
///
/// Each variant carries a flat set of fields; actions never nest.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AgencyFinderDataFetch,
    AgencyFinderDataReceive {
        agency_components: Vec<Resource>,
    },
    AgencyFinderDataComplete,
    AgencyComponentFetch {
        agency_component_id: String,
    },
    AgencyComponentReceive {
        agency_component: Resource,
    },

    /// Start of report request `request_id`; `types_count` paginated groups
    /// follow. Receive and complete events carry the id of their request.
    QuarterlyReportDataFetch {
        request_id: u64,
        types_count: usize,
    },
    QuarterlyReportDataReceive {
        request_id: u64,
        quarterly_reports: Vec<Resource>,
    },
    /// One fetch group ran out of pages.
    QuarterlyReportDataComplete {
        request_id: u64,
        type_id: String,
    },

    FiscalYearsFetch,
    FiscalYearsReceive {
        fiscal_years: Vec<String>,
    },
    FiscalYearsComplete,

    DataTypesFetch,
    DataTypesReceive {
        data_types: Vec<DataTypeDescriptor>,
    },
    DataTypesComplete,

    SelectedAgenciesAppendBlank,
    SelectedAgenciesUpdate {
        index: usize,
        selection: SelectionEntry,
    },
    SelectedAgenciesToggleSelectAll,
    AgencyComponentRemove {
        index: usize,
    },
    /// Stage a component checkbox change for the agency row at `index`.
    ComponentTemporaryUpdate {
        index: usize,
        component_index: usize,
        selected: bool,
    },
    ComponentTemporaryUpdateAll {
        index: usize,
        selected: bool,
    },
    ComponentsDiscardTemporary,
    ComponentsMergeTemporary,

    DataTypeAppendBlank,
    DataTypeUpdate {
        index: usize,
        data_type: DataTypeSelection,
    },
    DataTypeFieldRemove {
        index: usize,
    },

    SelectedFiscalYearsUpdate {
        fiscal_years: Vec<String>,
    },
    SelectedQuartersUpdate {
        quarters: Vec<String>,
    },

    ValidateForm,
    ReportSubmissionType {
        submission_action: SubmissionAction,
    },
    ClearForm,
    ReloadForm {
        view_mode: ViewMode,
    },
}

impl Action {
    /// Stable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AgencyFinderDataFetch => "AGENCY_FINDER_DATA_FETCH",
            Action::AgencyFinderDataReceive { .. } => "AGENCY_FINDER_DATA_RECEIVE",
            Action::AgencyFinderDataComplete => "AGENCY_FINDER_DATA_COMPLETE",
            Action::AgencyComponentFetch { .. } => "AGENCY_COMPONENT_FETCH",
            Action::AgencyComponentReceive { .. } => "AGENCY_COMPONENT_RECEIVE",
            Action::QuarterlyReportDataFetch { .. } => "QUARTERLY_REPORT_DATA_FETCH",
            Action::QuarterlyReportDataReceive { .. } => "QUARTERLY_REPORT_DATA_RECEIVE",
            Action::QuarterlyReportDataComplete { .. } => "QUARTERLY_REPORT_DATA_COMPLETE",
            Action::FiscalYearsFetch => "QUARTERLY_REPORT_FISCAL_YEARS_FETCH",
            Action::FiscalYearsReceive { .. } => "QUARTERLY_REPORT_FISCAL_YEARS_RECEIVE",
            Action::FiscalYearsComplete => "QUARTERLY_REPORT_FISCAL_YEARS_COMPLETE",
            Action::DataTypesFetch => "QUARTERLY_REPORT_DATA_TYPES_FETCH",
            Action::DataTypesReceive { .. } => "QUARTERLY_REPORT_DATA_TYPES_RECEIVE",
            Action::DataTypesComplete => "QUARTERLY_REPORT_DATA_TYPES_COMPLETE",
            Action::SelectedAgenciesAppendBlank => "SELECTED_AGENCIES_APPEND_BLANK",
            Action::SelectedAgenciesUpdate { .. } => "SELECTED_AGENCIES_UPDATE",
            Action::SelectedAgenciesToggleSelectAll => "SELECTED_AGENCIES_TOGGLE_SELECT_ALL",
            Action::AgencyComponentRemove { .. } => "QUARTERLY_REPORT_AGENCY_COMPONENT_REMOVE",
            Action::ComponentTemporaryUpdate { .. } => "SELECTED_AGENCY_COMPONENT_TEMPORARY_UPDATE",
            Action::ComponentTemporaryUpdateAll { .. } => {
                "SELECTED_AGENCY_COMPONENT_TEMPORARY_UPDATE_ALL"
            }
            Action::ComponentsDiscardTemporary => "SELECTED_AGENCY_COMPONENTS_DISCARD_TEMPORARY",
            Action::ComponentsMergeTemporary => "SELECTED_AGENCY_COMPONENTS_MERGE_TEMPORARY",
            Action::DataTypeAppendBlank => "QUARTERLY_REPORT_DATA_TYPE_APPEND_BLANK",
            Action::DataTypeUpdate { .. } => "QUARTERLY_REPORT_DATA_TYPE_UPDATE",
            Action::DataTypeFieldRemove { .. } => "QUARTERLY_REPORT_DATA_TYPE_FIELD_REMOVE",
            Action::SelectedFiscalYearsUpdate { .. } => "SELECTED_FISCAL_YEARS_UPDATE",
            Action::SelectedQuartersUpdate { .. } => "SELECTED_QUARTERS_UPDATE",
            Action::ValidateForm => "VALIDATE_FORM",
            Action::ReportSubmissionType { .. } => "REPORT_SUBMISSION_TYPE",
            Action::ClearForm => "CLEAR_FORM",
            Action::ReloadForm { .. } => "RELOAD_FORM",
        }
    }
}
