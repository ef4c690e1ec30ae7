use std::path::PathBuf;
use thiserror::Error;

/// Reasons a [`crate::store::TaskStore`] operation was refused or failed.
///
/// Every variant leaves the task list exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task name cannot be empty.")]
    EmptyName,

    #[error("Invalid task number.")]
    InvalidIndex(usize),

    #[error("Invalid choice.")]
    UnknownSortKey(String),

    #[error("could not save tasks to {}: {source:#}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl StoreError {
    /// Validation errors are reported inline; storage errors deserve more attention.
    pub fn is_validation(&self) -> bool {
        !matches!(self, StoreError::Storage { .. })
    }
}
