//! Application stores.
//!
//! Each submodule pairs a snapshot type with the [`Reducer`](crate::flux::Reducer)
//! that evolves it. The aliases below are the concrete containers the
//! [`AppContext`](crate::context::AppContext) registers with the dispatcher.

pub mod agency_finder;
pub mod data_types;
pub mod fiscal_years;
pub mod form;
pub mod report_data;

use crate::flux::Store;

pub type AgencyFinderStore = Store<agency_finder::AgencyFinderReducer>;
pub type DataTypesStore = Store<data_types::DataTypesReducer>;
pub type FiscalYearsStore = Store<fiscal_years::FiscalYearsReducer>;
pub type FormStore = Store<form::FormReducer>;
pub type ReportDataStore = Store<report_data::ReportDataReducer>;
