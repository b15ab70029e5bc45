mod reducer;
mod state;

pub use reducer::AgencyFinderReducer;
pub use state::{Agency, AgencyComponent, AgencyFinderState, FinderOption};
