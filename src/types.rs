//! Domain types shared by the stores, the query builder and the actions.

use serde::{Deserialize, Serialize};

/// One selectable report data type from the `report_data_map.json` catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub pretty: String,
    /// Component-level field names for this type.
    #[serde(default)]
    pub fields: Vec<String>,
    /// Relationship paths that must be included to read `fields`.
    #[serde(default)]
    pub includes: Vec<String>,
}

/// A data type row of the report form.
///
/// Rows are copied from the catalog when the user picks a type. A blank row
/// has no id and no fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataTypeSelection {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
}

impl DataTypeSelection {
    pub fn from_descriptor(descriptor: &DataTypeDescriptor) -> Self {
        Self {
            id: descriptor.id.clone(),
            fields: descriptor.fields.clone(),
            includes: descriptor.includes.clone(),
        }
    }

    /// A row represents a filled-in form field.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionType {
    #[default]
    Agency,
    AgencyComponent,
}

/// Component checkbox state under an agency selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentSelection {
    pub abbreviation: String,
    pub selected: bool,
    /// The synthetic "agency overall" entry rather than a real component.
    #[serde(default)]
    pub is_overall: bool,
}

/// One agency or agency component row of the report form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionEntry {
    #[serde(rename = "type")]
    pub selection_type: SelectionType,
    pub abbreviation: String,
    pub selected: bool,
    /// Only meaningful for [`SelectionType::Agency`].
    #[serde(default)]
    pub components: Vec<ComponentSelection>,
}

impl SelectionEntry {
    pub fn agency(abbreviation: impl Into<String>, components: Vec<ComponentSelection>) -> Self {
        Self {
            selection_type: SelectionType::Agency,
            abbreviation: abbreviation.into(),
            selected: true,
            components,
        }
    }

    pub fn component(abbreviation: impl Into<String>) -> Self {
        Self {
            selection_type: SelectionType::AgencyComponent,
            abbreviation: abbreviation.into(),
            selected: true,
            components: Vec::new(),
        }
    }

    pub fn is_agency(&self) -> bool {
        self.selection_type == SelectionType::Agency
    }

    /// An agency whose "overall" component is checked.
    pub fn has_overall_selected(&self) -> bool {
        self.is_agency()
            && self
                .components
                .iter()
                .any(|component| component.selected && component.is_overall)
    }
}

/// Value/label pair for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// What the user intends to do with the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionAction {
    #[default]
    View,
    Download,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Form,
    Results,
}
