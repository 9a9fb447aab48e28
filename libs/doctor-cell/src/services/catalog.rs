use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info};

use crate::models::{DoctorDataset, DoctorRecord};

const BUNDLED_DOCTORS: &str = include_str!("../../data/doctors.json");

/// The doctor dataset for the lifetime of the process. Loaded once and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct DoctorCatalog {
    doctors: Vec<DoctorRecord>,
}

impl DoctorCatalog {
    /// Catalog backed by the dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DOCTORS).context("bundled doctor dataset is invalid")
    }

    /// Uses the file at `path` when given, the bundled dataset otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading doctor dataset from {}", path.display());

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read doctor dataset {}", path.display()))?;

        Self::from_json(&raw)
            .with_context(|| format!("invalid doctor dataset {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let dataset: DoctorDataset = serde_json::from_str(raw)?;
        Self::from_records(dataset.doctors)
    }

    pub fn from_records(doctors: Vec<DoctorRecord>) -> Result<Self> {
        validate(&doctors)?;
        info!("Doctor catalog loaded with {} records", doctors.len());
        Ok(Self { doctors })
    }

    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

fn validate(doctors: &[DoctorRecord]) -> Result<()> {
    let mut ids = HashSet::new();

    for doctor in doctors {
        if doctor.id.trim().is_empty() {
            bail!("doctor {:?} has an empty id", doctor.name);
        }
        if !ids.insert(doctor.id.as_str()) {
            return Err(anyhow!("duplicate doctor id {}", doctor.id));
        }
        if !(0.0..=5.0).contains(&doctor.rating) {
            bail!("doctor {} has rating {} outside 0-5", doctor.id, doctor.rating);
        }
        if !(doctor.consultation_fee >= 0.0) {
            bail!("doctor {} has negative consultation fee", doctor.id);
        }
    }

    Ok(())
}
