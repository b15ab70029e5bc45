mod reducer;
mod state;

pub use reducer::ReportDataReducer;
pub use state::ReportDataState;
