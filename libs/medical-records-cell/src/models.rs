use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

// ==============================================================================
// RECORD KINDS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Reading against its reference range. Anything but `Normal` is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Normal,
    High,
    Low,
    Critical,
}

impl ReadingStatus {
    pub fn is_abnormal(&self) -> bool {
        *self != ReadingStatus::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationStatus {
    Active,
    Discontinued,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStatus {
    Active,
    Resolved,
    Chronic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSign {
    pub id: String,
    pub name: String,
    pub value: String,
    pub unit: String,
    pub date: NaiveDate,
    pub trend: Trend,
    pub normal_range: String,
    pub status: ReadingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: MedicationStatus,
    pub prescribed_by: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub id: String,
    pub test_name: String,
    pub result: String,
    pub unit: String,
    pub date: NaiveDate,
    pub normal_range: String,
    pub status: ReadingStatus,
    pub lab: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub condition: String,
    pub diagnosis_date: NaiveDate,
    pub status: ConditionStatus,
    pub doctor: String,
    pub notes: String,
    #[serde(default)]
    pub treatments: Vec<String>,
}

/// Dashboard card. `last_updated` is display text, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: String,
    pub name: String,
    pub value: String,
    pub unit: String,
    pub trend: Trend,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsDataset {
    #[serde(default)]
    pub vitals: Vec<VitalSign>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub labs: Vec<LabResult>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub metrics: Vec<HealthMetric>,
}

// ==============================================================================
// TABS AND QUERIES
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordTab {
    Vitals,
    Medications,
    Labs,
    History,
}

impl FromStr for RecordTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vitals" => Ok(RecordTab::Vitals),
            "medications" => Ok(RecordTab::Medications),
            "labs" => Ok(RecordTab::Labs),
            "history" => Ok(RecordTab::History),
            other => Err(AppError::NotFound(format!("Unknown records tab: {}", other))),
        }
    }
}

impl fmt::Display for RecordTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTab::Vitals => write!(f, "vitals"),
            RecordTab::Medications => write!(f, "medications"),
            RecordTab::Labs => write!(f, "labs"),
            RecordTab::History => write!(f, "history"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsQuery {
    #[serde(default)]
    pub search_term: Option<String>,
}

/// One tab's worth of records, serialized as `{"tab": .., "records": [..]}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", content = "records", rename_all = "lowercase")]
pub enum TabRecords {
    Vitals(Vec<VitalSign>),
    Medications(Vec<Medication>),
    Labs(Vec<LabResult>),
    History(Vec<HistoryEntry>),
}

impl TabRecords {
    pub fn len(&self) -> usize {
        match self {
            TabRecords::Vitals(records) => records.len(),
            TabRecords::Medications(records) => records.len(),
            TabRecords::Labs(records) => records.len(),
            TabRecords::History(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordsSummary {
    pub vitals: usize,
    pub medications: usize,
    pub labs: usize,
    pub history: usize,
    pub abnormal_vitals: usize,
    pub abnormal_labs: usize,
    pub active_medications: usize,
}
