use crate::flux::StoreState;
use crate::types::SelectOption;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FiscalYearsState {
    pub fiscal_years: Vec<String>,
    /// Newest first, without duplicates.
    pub fiscal_year_options: Vec<SelectOption>,
    pub is_loading: bool,
}

impl StoreState for FiscalYearsState {}
