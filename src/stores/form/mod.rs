mod reducer;
mod state;

pub use reducer::FormReducer;
pub use state::{FormState, FormValidation};
