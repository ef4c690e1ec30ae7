// File: ./src/model/item.rs
use crate::model::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
            completed: false,
        }
    }

    /// Marker used by both front-ends for the completion column.
    pub fn status_marker(&self) -> &'static str {
        if self.completed { "✓" } else { "✗" }
    }
}
