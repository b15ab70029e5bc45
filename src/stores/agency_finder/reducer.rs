use crate::flux::{Action, Reducer};
use crate::stores::agency_finder::state::{AgencyComponent, AgencyFinderState, FinderOption};
use crate::types::SelectionType;

pub struct AgencyFinderReducer;

impl Reducer for AgencyFinderReducer {
    type State = AgencyFinderState;

    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
        match action {
            Action::AgencyFinderDataFetch => Some(AgencyFinderState {
                is_loading: true,
                requested_component_id: state.requested_component_id.clone(),
                agency_component: state.agency_component.clone(),
                ..AgencyFinderState::default()
            }),
            Action::AgencyFinderDataReceive { agency_components } => {
                let mut next = state.clone();
                let mut accepted = 0;
                for resource in agency_components {
                    let Some((component, agency)) = AgencyComponent::from_resource(resource)
                    else {
                        tracing::debug!(id = %resource.id, "Skipping incomplete agency component");
                        continue;
                    };
                    if let Some(agency) = agency {
                        next.agencies.entry(agency.id.clone()).or_insert(agency);
                    }
                    next.agency_components.push(component);
                    accepted += 1;
                }
                (accepted > 0).then_some(next)
            }
            Action::AgencyFinderDataComplete => Some(AgencyFinderState {
                finder_options: finder_options(state),
                is_loading: false,
                is_complete: true,
                ..state.clone()
            }),
            Action::AgencyComponentFetch {
                agency_component_id,
            } => Some(AgencyFinderState {
                requested_component_id: Some(agency_component_id.clone()),
                agency_component: None,
                ..state.clone()
            }),
            Action::AgencyComponentReceive { agency_component } => Some(AgencyFinderState {
                agency_component: Some(agency_component.clone()),
                ..state.clone()
            }),
            _ => None,
        }
    }
}

/// Agencies and components together, sorted case-insensitively by label.
fn finder_options(state: &AgencyFinderState) -> Vec<FinderOption> {
    let mut options: Vec<FinderOption> = state
        .agencies
        .values()
        .map(|agency| FinderOption {
            selection_type: SelectionType::Agency,
            abbreviation: agency.abbreviation.clone(),
            label: agency.name.clone(),
        })
        .chain(state.agency_components.iter().map(|component| FinderOption {
            selection_type: SelectionType::AgencyComponent,
            abbreviation: component.abbreviation.clone(),
            label: component.title.clone(),
        }))
        .collect();
    options.sort_by_cached_key(|option| option.label.to_lowercase());
    options
}
