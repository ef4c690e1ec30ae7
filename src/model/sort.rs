use crate::error::StoreError;
use crate::model::Task;
use std::fmt;
use std::str::FromStr;

/// Ordering applied by [`crate::store::TaskStore::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, case-insensitive.
    Name,
    /// High, Medium, Low, then unrecognised values.
    Priority,
}

impl SortKey {
    /// Stable in-place sort, so equal keys keep their relative order.
    pub fn apply(self, tasks: &mut [Task]) {
        match self {
            SortKey::Name => tasks.sort_by_cached_key(|t| t.name.to_lowercase()),
            SortKey::Priority => tasks.sort_by_key(|t| t.priority.rank()),
        }
    }
}

impl FromStr for SortKey {
    type Err = StoreError;

    /// Accepts the menu numbers as well as the criterion names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "name" => Ok(SortKey::Name),
            "2" | "priority" => Ok(SortKey::Priority),
            other => Err(StoreError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Priority => f.write_str("priority"),
        }
    }
}
