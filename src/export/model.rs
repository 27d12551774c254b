// src/export/model.rs

use crate::core::recommend::recommend;
use crate::models::MoodRecord;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub date: String,
    pub time: String,
    pub employee_ref: String,
    pub mood: String,
    pub stress: bool,
    pub source: String,
    pub recommendation: String,
}

impl From<&MoodRecord> for RecordExport {
    fn from(r: &MoodRecord) -> Self {
        Self {
            date: r.timestamp.format("%Y-%m-%d").to_string(),
            time: r.timestamp.format("%H:%M:%S").to_string(),
            employee_ref: r.employee_ref.clone(),
            mood: r.mood.label().to_string(),
            stress: r.mood.is_stress_indicating(),
            source: r.source.as_str().to_string(),
            recommendation: recommend(&r.mood).to_string(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "time",
        "employee_ref",
        "mood",
        "stress",
        "source",
        "recommendation",
    ]
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.time.clone(),
        e.employee_ref.clone(),
        e.mood.clone(),
        e.stress.to_string(),
        e.source.clone(),
        e.recommendation.clone(),
    ]
}
