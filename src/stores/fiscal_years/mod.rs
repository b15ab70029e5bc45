mod reducer;
mod state;

pub use reducer::FiscalYearsReducer;
pub use state::FiscalYearsState;
