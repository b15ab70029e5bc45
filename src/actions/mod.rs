//! Report operations: the only code that dispatches actions.

mod error;
mod handle;
mod report;
mod source;

pub use error::ActionError;
pub use handle::FetchHandle;
pub use report::ReportActions;
pub use source::{DataTypeSource, FileDataTypeSource, StaticDataTypeSource};
