use indexmap::IndexMap;

use crate::flux::StoreState;
use crate::types::{DataTypeDescriptor, SelectOption};

/// The report data type catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTypesState {
    /// Keyed by descriptor id, in catalog order.
    pub data_types: IndexMap<String, DataTypeDescriptor>,
    /// Built once the catalog is complete.
    pub data_type_options: Vec<SelectOption>,
}

impl StoreState for DataTypesState {}

impl DataTypesState {
    pub fn data_type(&self, id: &str) -> Option<&DataTypeDescriptor> {
        self.data_types.get(id)
    }

    pub fn fields_for(&self, id: &str) -> &[String] {
        self.data_type(id)
            .map(|descriptor| descriptor.fields.as_slice())
            .unwrap_or_default()
    }

    pub fn includes_for(&self, id: &str) -> &[String] {
        self.data_type(id)
            .map(|descriptor| descriptor.includes.as_slice())
            .unwrap_or_default()
    }

    pub fn pretty_label_for(&self, id: &str) -> &str {
        self.data_type(id)
            .map(|descriptor| descriptor.pretty.as_str())
            .unwrap_or_default()
    }
}
