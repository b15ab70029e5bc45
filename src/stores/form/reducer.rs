use crate::flux::{Action, Reducer};
use crate::stores::form::state::FormState;
use crate::types::{ComponentSelection, DataTypeSelection, SelectionEntry};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;

    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
        match action {
            Action::SelectedAgenciesAppendBlank => {
                let mut next = state.clone();
                next.selected_agencies.push(SelectionEntry::default());
                Some(next)
            }
            Action::SelectedAgenciesUpdate { index, selection } => {
                if *index >= state.selected_agencies.len() {
                    return None;
                }
                let mut next = state.clone();
                next.selected_agencies[*index] = selection.clone();
                next.temporary_components.remove(index);
                Some(next)
            }
            Action::SelectedAgenciesToggleSelectAll => Some(FormState {
                all_agencies_selected: !state.all_agencies_selected,
                ..state.clone()
            }),
            Action::AgencyComponentRemove { index } => {
                if *index >= state.selected_agencies.len() {
                    return None;
                }
                let mut next = state.clone();
                next.selected_agencies.remove(*index);
                if next.selected_agencies.is_empty() {
                    next.selected_agencies.push(SelectionEntry::default());
                }
                // Staged edits are keyed by row position.
                next.temporary_components.clear();
                Some(next)
            }
            Action::ComponentTemporaryUpdate {
                index,
                component_index,
                selected,
            } => {
                let mut next = state.clone();
                let components = staged_components(&mut next, *index)?;
                components.get_mut(*component_index)?.selected = *selected;
                Some(next)
            }
            Action::ComponentTemporaryUpdateAll { index, selected } => {
                let mut next = state.clone();
                let components = staged_components(&mut next, *index)?;
                for component in components.iter_mut() {
                    component.selected = *selected;
                }
                Some(next)
            }
            Action::ComponentsDiscardTemporary => {
                let mut next = state.clone();
                next.temporary_components.clear();
                Some(next)
            }
            Action::ComponentsMergeTemporary => {
                let mut next = state.clone();
                let staged = std::mem::take(&mut next.temporary_components);
                for (index, components) in staged {
                    if let Some(entry) = next.selected_agencies.get_mut(index) {
                        entry.components = components;
                    }
                }
                Some(next)
            }
            Action::DataTypeAppendBlank => {
                let mut next = state.clone();
                next.selected_data_types.push(DataTypeSelection::default());
                Some(next)
            }
            Action::DataTypeUpdate { index, data_type } => {
                if *index >= state.selected_data_types.len() {
                    return None;
                }
                let mut next = state.clone();
                next.selected_data_types[*index] = data_type.clone();
                Some(next)
            }
            Action::DataTypeFieldRemove { index } => {
                if *index >= state.selected_data_types.len() {
                    return None;
                }
                let mut next = state.clone();
                next.selected_data_types.remove(*index);
                if next.selected_data_types.is_empty() {
                    next.selected_data_types.push(DataTypeSelection::default());
                }
                Some(next)
            }
            Action::SelectedFiscalYearsUpdate { fiscal_years } => Some(FormState {
                selected_fiscal_years: fiscal_years.clone(),
                ..state.clone()
            }),
            Action::SelectedQuartersUpdate { quarters } => Some(FormState {
                selected_quarters: quarters.clone(),
                ..state.clone()
            }),
            Action::ValidateForm => Some(FormState {
                validation: Some(state.validate()),
                ..state.clone()
            }),
            Action::ReportSubmissionType { submission_action } => Some(FormState {
                submission_action: *submission_action,
                ..state.clone()
            }),
            Action::ClearForm => Some(FormState::default()),
            Action::ReloadForm { view_mode } => Some(FormState {
                view_mode: *view_mode,
                ..state.clone()
            }),
            _ => None,
        }
    }
}

/// Staged component list for the agency row at `index`, seeded from the
/// row's current components on first edit.
fn staged_components(
    state: &mut FormState,
    index: usize,
) -> Option<&mut Vec<ComponentSelection>> {
    let entry = state.selected_agencies.get(index)?;
    if !entry.is_agency() {
        return None;
    }
    let seed = entry.components.clone();
    Some(state.temporary_components.entry(index).or_insert(seed))
}
