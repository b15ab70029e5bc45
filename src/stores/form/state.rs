use std::collections::BTreeMap;

use crate::flux::StoreState;
use crate::types::{
    ComponentSelection, DataTypeSelection, SelectionEntry, SubmissionAction, ViewMode,
};

/// Outcome of the last `ValidateForm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormValidation {
    pub agencies: bool,
    pub data_types: bool,
    pub fiscal_years: bool,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.agencies && self.data_types && self.fiscal_years
    }
}

/// User selections of the quarterly report form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub selected_agencies: Vec<SelectionEntry>,
    pub all_agencies_selected: bool,
    pub selected_data_types: Vec<DataTypeSelection>,
    pub selected_fiscal_years: Vec<String>,
    pub selected_quarters: Vec<String>,
    /// Staged component checkboxes, keyed by agency row index.
    pub temporary_components: BTreeMap<usize, Vec<ComponentSelection>>,
    pub validation: Option<FormValidation>,
    pub submission_action: SubmissionAction,
    pub view_mode: ViewMode,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            selected_agencies: vec![SelectionEntry::default()],
            all_agencies_selected: false,
            selected_data_types: vec![DataTypeSelection::default()],
            selected_fiscal_years: Vec::new(),
            selected_quarters: Vec::new(),
            temporary_components: BTreeMap::new(),
            validation: None,
            submission_action: SubmissionAction::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl StoreState for FormState {}

impl FormState {
    /// Rows that name an agency or component and are checked.
    pub fn selected_agencies(&self) -> Vec<&SelectionEntry> {
        self.selected_agencies
            .iter()
            .filter(|entry| !entry.abbreviation.is_empty() && entry.selected)
            .collect()
    }

    /// Filled-in data type rows, in form order.
    pub fn valid_data_types(rows: &[DataTypeSelection]) -> Vec<DataTypeSelection> {
        rows.iter().filter(|row| row.is_valid()).cloned().collect()
    }

    /// Whether any selected agency has its overall entry checked.
    pub fn include_overall(&self) -> bool {
        self.selected_agencies()
            .iter()
            .any(|entry| entry.has_overall_selected())
    }

    /// Abbreviations of the selected agency rows and component rows.
    pub fn organization_filters(&self) -> (Vec<String>, Vec<String>) {
        let (agencies, components): (Vec<&SelectionEntry>, Vec<&SelectionEntry>) = self
            .selected_agencies()
            .into_iter()
            .partition(|entry| entry.is_agency());
        (
            agencies.iter().map(|e| e.abbreviation.clone()).collect(),
            components.iter().map(|e| e.abbreviation.clone()).collect(),
        )
    }

    pub(super) fn validate(&self) -> FormValidation {
        FormValidation {
            agencies: self.all_agencies_selected || !self.selected_agencies().is_empty(),
            data_types: self.selected_data_types.iter().any(DataTypeSelection::is_valid),
            fiscal_years: !self.selected_fiscal_years.is_empty(),
        }
    }
}
