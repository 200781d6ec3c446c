//! Priority labels shared by appointments and notifications.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A priority label.
///
/// Appointments use `low|normal|high|urgent`, notifications use
/// `low|medium|high`. Both map onto one rank scale for sorting, and labels
/// the backend invents that we do not recognize are preserved verbatim in
/// [`Priority::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Normal,
    Medium,
    High,
    Urgent,
    /// Unrecognized label, kept as received.
    Other(String),
}

impl Priority {
    /// Numeric rank used for sorting only; not a stored field.
    ///
    /// `urgent`/`high` = 3, `medium`/`normal` = 2, `low` = 1, anything
    /// unrecognized = 0 (sorts last under descending rank).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent | Priority::High => 3,
            Priority::Medium | Priority::Normal => 2,
            Priority::Low => 1,
            Priority::Other(_) => 0,
        }
    }

    /// The wire label for this priority.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Other(label) => label,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        match label {
            "low" => Priority::Low,
            "normal" => Priority::Normal,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            "urgent" => Priority::Urgent,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Priority::from(label.as_str()))
    }
}
