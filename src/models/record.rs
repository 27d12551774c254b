use super::mood::Mood;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Camera,
    Text,
    #[default]
    Manual,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Camera => "camera",
            RecordSource::Text => "text",
            RecordSource::Manual => "manual",
        }
    }
}

/// One detection event, as persisted in the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecord {
    pub employee_ref: String, // pseudonymous id, see core::anonymize
    pub mood: Mood,
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub source: RecordSource,
}

impl MoodRecord {
    /// Record stamped with the current local time.
    pub fn now(employee_ref: impl Into<String>, mood: Mood, source: RecordSource) -> Self {
        Self {
            employee_ref: employee_ref.into(),
            mood,
            timestamp: Local::now(),
            source,
        }
    }

    pub fn at(
        employee_ref: impl Into<String>,
        mood: Mood,
        timestamp: DateTime<Local>,
        source: RecordSource,
    ) -> Self {
        Self {
            employee_ref: employee_ref.into(),
            mood,
            timestamp,
            source,
        }
    }
}
