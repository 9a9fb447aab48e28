use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::{
    HealthMetric, MedicationStatus, RecordTab, RecordsDataset, RecordsSummary, TabRecords,
};

const SAMPLE_RECORDS: &str = include_str!("../../data/records.json");

/// Read-only patient chart shown in the records viewer and on the dashboard.
#[derive(Debug, Clone)]
pub struct MedicalRecords {
    dataset: RecordsDataset,
}

impl MedicalRecords {
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_RECORDS).context("bundled medical records are invalid")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let dataset: RecordsDataset = serde_json::from_str(raw)?;
        info!(
            "Medical records loaded: {} vitals, {} medications, {} labs, {} history entries",
            dataset.vitals.len(),
            dataset.medications.len(),
            dataset.labs.len(),
            dataset.history.len()
        );
        Ok(Self { dataset })
    }

    /// Records on `tab`, narrowed to those whose descriptive text contains
    /// `search_term` (case-insensitive). A blank term keeps everything.
    pub fn records(&self, tab: RecordTab, search_term: Option<&str>) -> TabRecords {
        let needle = search_term
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());

        debug!("Listing {} records, search: {:?}", tab, needle);

        let hit = |fields: &[&str]| match &needle {
            Some(needle) => fields.iter().any(|field| field.to_lowercase().contains(needle)),
            None => true,
        };

        let data = &self.dataset;
        match tab {
            RecordTab::Vitals => TabRecords::Vitals(
                data.vitals
                    .iter()
                    .filter(|v| hit(&[v.name.as_str(), v.value.as_str(), v.unit.as_str()]))
                    .cloned()
                    .collect(),
            ),
            RecordTab::Medications => TabRecords::Medications(
                data.medications
                    .iter()
                    .filter(|m| hit(&[
                        m.name.as_str(),
                        m.dosage.as_str(),
                        m.prescribed_by.as_str(),
                        m.instructions.as_str(),
                    ]))
                    .cloned()
                    .collect(),
            ),
            RecordTab::Labs => TabRecords::Labs(
                data.labs
                    .iter()
                    .filter(|l| hit(&[l.test_name.as_str(), l.lab.as_str()]))
                    .cloned()
                    .collect(),
            ),
            RecordTab::History => TabRecords::History(
                data.history
                    .iter()
                    .filter(|h| {
                        let mut fields = vec![h.condition.as_str(), h.doctor.as_str(), h.notes.as_str()];
                        fields.extend(h.treatments.iter().map(String::as_str));
                        hit(&fields)
                    })
                    .cloned()
                    .collect(),
            ),
        }
    }

    pub fn summary(&self) -> RecordsSummary {
        let data = &self.dataset;
        RecordsSummary {
            vitals: data.vitals.len(),
            medications: data.medications.len(),
            labs: data.labs.len(),
            history: data.history.len(),
            abnormal_vitals: data.vitals.iter().filter(|v| v.status.is_abnormal()).count(),
            abnormal_labs: data.labs.iter().filter(|l| l.status.is_abnormal()).count(),
            active_medications: data
                .medications
                .iter()
                .filter(|m| m.status == MedicationStatus::Active)
                .count(),
        }
    }

    pub fn health_metrics(&self) -> &[HealthMetric] {
        &self.dataset.metrics
    }
}
