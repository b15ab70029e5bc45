use crate::flux::{Action, Reducer};
use crate::stores::report_data::state::ReportDataState;

pub struct ReportDataReducer;

impl Reducer for ReportDataReducer {
    type State = ReportDataState;

    fn reduce(state: &Self::State, action: &Action) -> Option<Self::State> {
        match action {
            Action::QuarterlyReportDataFetch {
                request_id,
                types_count,
            } => Some(ReportDataState {
                request_id: *request_id,
                groups_outstanding: *types_count,
                ..ReportDataState::default()
            }),
            Action::QuarterlyReportDataReceive {
                request_id,
                quarterly_reports,
            } if state.accepts(*request_id) => {
                let mut reports = state.reports.clone();
                reports.extend(quarterly_reports.iter().cloned());
                Some(ReportDataState {
                    reports,
                    ..state.clone()
                })
            }
            Action::QuarterlyReportDataComplete {
                request_id,
                type_id,
            } if state.accepts(*request_id) => {
                let mut completed_types = state.completed_types.clone();
                completed_types.push(type_id.clone());
                Some(ReportDataState {
                    groups_outstanding: state.groups_outstanding - 1,
                    completed_types,
                    ..state.clone()
                })
            }
            Action::ClearForm => Some(ReportDataState::default()),
            _ => None,
        }
    }
}
