use crate::flux::StoreState;
use crate::transport::Resource;

/// Report rows accumulated across every fetch group of the current request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportDataState {
    /// Request the rows belong to; `0` when no request has started.
    pub request_id: u64,
    /// In arrival order. Rows from different groups interleave.
    pub reports: Vec<Resource>,
    pub groups_outstanding: usize,
    /// Type ids of groups that ran out of pages, in completion order.
    pub completed_types: Vec<String>,
}

impl StoreState for ReportDataState {}

impl ReportDataState {
    pub fn is_fetching(&self) -> bool {
        self.groups_outstanding > 0
    }

    /// Events from any other request were abandoned by a clear or a newer fetch.
    pub fn accepts(&self, request_id: u64) -> bool {
        self.is_fetching() && self.request_id == request_id
    }
}
