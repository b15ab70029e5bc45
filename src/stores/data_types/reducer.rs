use crate::flux::{Action, Reducer};
use crate::stores::data_types::state::DataTypesState;
use crate::types::SelectOption;

pub struct DataTypesReducer;

impl Reducer for DataTypesReducer {
    type State = DataTypesState;

    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
        match action {
            Action::DataTypesReceive { data_types } => Some(DataTypesState {
                // A later duplicate id overwrites the earlier entry in place.
                data_types: data_types
                    .iter()
                    .map(|descriptor| (descriptor.id.clone(), descriptor.clone()))
                    .collect(),
                data_type_options: state.data_type_options.clone(),
            }),
            Action::DataTypesComplete => Some(DataTypesState {
                data_types: state.data_types.clone(),
                data_type_options: state
                    .data_types
                    .values()
                    .map(|descriptor| SelectOption::new(&descriptor.id, &descriptor.label))
                    .collect(),
            }),
            _ => None,
        }
    }
}
