use tokio::task::JoinHandle;

use super::error::ActionError;

/// Completion handle for one spawned unit of fetch work.
///
/// Dropping the handle detaches the task; it still runs to completion and
/// keeps dispatching.
#[derive(Debug)]
pub struct FetchHandle<T> {
    label: String,
    task: JoinHandle<Result<T, ActionError>>,
}

impl<T: Send + 'static> FetchHandle<T> {
    pub(crate) fn spawn<F>(label: impl Into<String>, work: F) -> Self
    where
        F: std::future::Future<Output = Result<T, ActionError>> + Send + 'static,
    {
        Self {
            label: label.into(),
            task: tokio::spawn(work),
        }
    }

    /// What this handle fetches: a data type id or an operation name.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the unit of work to finish.
    pub async fn join(self) -> Result<T, ActionError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(ActionError::TaskFailed(e.to_string())),
        }
    }
}
