use indexmap::IndexMap;

use crate::flux::StoreState;
use crate::transport::Resource;
use crate::types::{ComponentSelection, SelectionEntry, SelectionType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyComponent {
    pub id: String,
    pub title: String,
    pub abbreviation: String,
    pub agency_id: String,
}

impl AgencyComponent {
    /// Read a component and its included agency.
    ///
    /// `None` when the resource lacks an abbreviation or an agency link.
    pub(super) fn from_resource(resource: &Resource) -> Option<(Self, Option<Agency>)> {
        let abbreviation = resource.attr_str("abbreviation")?.to_string();
        let agency = resource.related("agency")?;
        if agency.id.is_empty() {
            return None;
        }

        let component = AgencyComponent {
            id: resource.id.clone(),
            title: resource
                .attr_str("title")
                .unwrap_or(abbreviation.as_str())
                .to_string(),
            abbreviation,
            agency_id: agency.id.clone(),
        };
        let agency = agency.attr_str("abbreviation").map(|abbreviation| Agency {
            id: agency.id.clone(),
            name: agency.attr_str("name").unwrap_or(abbreviation).to_string(),
            abbreviation: abbreviation.to_string(),
        });
        Some((component, agency))
    }
}

/// One entry of the agency/component typeahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOption {
    pub selection_type: SelectionType,
    pub abbreviation: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgencyFinderState {
    /// Keyed by agency id, in first-seen order.
    pub agencies: IndexMap<String, Agency>,
    pub agency_components: Vec<AgencyComponent>,
    pub finder_options: Vec<FinderOption>,
    pub is_loading: bool,
    pub is_complete: bool,
    pub requested_component_id: Option<String>,
    /// Detailed record from the last single component fetch.
    pub agency_component: Option<Resource>,
}

impl StoreState for AgencyFinderState {}

impl AgencyFinderState {
    pub fn agency_by_abbreviation(&self, abbreviation: &str) -> Option<&Agency> {
        self.agencies
            .values()
            .find(|agency| agency.abbreviation == abbreviation)
    }

    pub fn components_of<'a>(
        &'a self,
        agency_id: &'a str,
    ) -> impl Iterator<Item = &'a AgencyComponent> + 'a {
        self.agency_components
            .iter()
            .filter(move |component| component.agency_id == agency_id)
    }

    /// Form row for an agency: a checked "overall" entry followed by each of
    /// its components, unchecked.
    pub fn selection_for_agency(&self, abbreviation: &str) -> Option<SelectionEntry> {
        let agency = self.agency_by_abbreviation(abbreviation)?;
        let overall = ComponentSelection {
            abbreviation: agency.abbreviation.clone(),
            selected: true,
            is_overall: true,
        };
        let components = std::iter::once(overall)
            .chain(
                self.components_of(&agency.id)
                    .map(|component| ComponentSelection {
                        abbreviation: component.abbreviation.clone(),
                        selected: false,
                        is_overall: false,
                    }),
            )
            .collect();

        Some(SelectionEntry::agency(agency.abbreviation.clone(), components))
    }

    pub fn selection_for_component(&self, abbreviation: &str) -> Option<SelectionEntry> {
        self.agency_components
            .iter()
            .find(|component| component.abbreviation == abbreviation)
            .map(|component| SelectionEntry::component(component.abbreviation.clone()))
    }
}
