use std::cmp::Reverse;

use crate::flux::{Action, Reducer};
use crate::stores::fiscal_years::state::FiscalYearsState;
use crate::types::SelectOption;

pub struct FiscalYearsReducer;

impl Reducer for FiscalYearsReducer {
    type State = FiscalYearsState;

    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
        match action {
            Action::FiscalYearsFetch => Some(FiscalYearsState {
                is_loading: true,
                ..state.clone()
            }),
            Action::FiscalYearsReceive { fiscal_years } => Some(FiscalYearsState {
                fiscal_years: fiscal_years.clone(),
                ..state.clone()
            }),
            Action::FiscalYearsComplete => {
                let mut years = state.fiscal_years.clone();
                // Numeric years sort by value; anything else sorts after them.
                years.sort_by_key(|year| (Reverse(year.parse::<i64>().ok()), year.clone()));
                years.dedup();

                Some(FiscalYearsState {
                    fiscal_years: state.fiscal_years.clone(),
                    fiscal_year_options: years
                        .iter()
                        .map(|year| SelectOption::new(year, year))
                        .collect(),
                    is_loading: false,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn received(years: &[&str]) -> FiscalYearsState {
        FiscalYearsReducer::reduce(
            &FiscalYearsState::default(),
            &Action::FiscalYearsReceive {
                fiscal_years: years.iter().map(|y| y.to_string()).collect(),
            },
        )
        .unwrap()
    }

    #[test]
    fn fetch_marks_loading() {
        let state =
            FiscalYearsReducer::reduce(&FiscalYearsState::default(), &Action::FiscalYearsFetch)
                .unwrap();
        assert!(state.is_loading);
    }

    #[test]
    fn receive_replaces_list() {
        let first = received(&["2019"]);
        let second = FiscalYearsReducer::reduce(
            &first,
            &Action::FiscalYearsReceive {
                fiscal_years: vec!["2020".to_string()],
            },
        )
        .unwrap();
        assert_eq!(second.fiscal_years, vec!["2020".to_string()]);
    }

    #[test]
    fn complete_sorts_descending_without_duplicates() {
        let state = FiscalYearsReducer::reduce(
            &received(&["2019", "2021", "2020", "2021", "9"]),
            &Action::FiscalYearsComplete,
        )
        .unwrap();

        let values: Vec<&str> = state
            .fiscal_year_options
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(values, vec!["2021", "2020", "2019", "9"]);
        assert!(!state.is_loading);
    }
}
