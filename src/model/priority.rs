use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a task. Sorting by priority puts `High` first.
///
/// Files written by hand can carry any string in the `priority` field. Such
/// values are kept verbatim in [`Priority::Other`] so a load/save cycle does not
/// rewrite them, and they rank after every recognised level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
    Other(String),
}

impl Priority {
    pub const LEVELS: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parses user input. Surrounding whitespace and letter case are ignored,
    /// anything other than the three levels yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_lowercase();
        match lower.as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Sort rank: 1 for High through 3 for Low, 4 for unrecognised values.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::Other(_) => 4,
        }
    }

    /// `High/Medium/Low`, as shown in prompts.
    pub fn choices() -> String {
        Self::LEVELS
            .iter()
            .map(Priority::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored values must match the literal exactly, unlike `parse`.
impl From<String> for Priority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "High" => Priority::High,
            "Medium" => Priority::Medium,
            "Low" => Priority::Low,
            _ => Priority::Other(raw),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(raw) => raw,
            level => level.as_str().to_string(),
        }
    }
}
