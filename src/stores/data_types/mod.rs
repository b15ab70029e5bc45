mod reducer;
mod state;

pub use reducer::DataTypesReducer;
pub use state::DataTypesState;
