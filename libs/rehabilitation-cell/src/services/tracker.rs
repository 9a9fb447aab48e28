use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use doctor_cell::services::{directory, DoctorCatalog};

use crate::models::{
    Difficulty, Exercise, ExercisePlan, RehabSession, RehabilitationError, WeeklyProgress,
    REHABILITATION_SPECIALTY,
};

/// Per-patient exercise plans, seeded with the default programme the first
/// time a patient looks at theirs.
#[derive(Debug, Clone, Default)]
pub struct RehabilitationTracker {
    plans: Arc<RwLock<HashMap<String, Vec<Exercise>>>>,
}

impl RehabilitationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn plan(&self, patient_id: &str) -> ExercisePlan {
        let mut plans = self.plans.write().await;
        let exercises = plans
            .entry(patient_id.to_string())
            .or_insert_with(default_exercises);
        ExercisePlan::new(exercises.clone())
    }

    /// Marks one exercise done. Completing it again changes nothing.
    pub async fn complete(
        &self,
        patient_id: &str,
        exercise_id: &str,
    ) -> Result<ExercisePlan, RehabilitationError> {
        let mut plans = self.plans.write().await;
        let exercises = plans
            .entry(patient_id.to_string())
            .or_insert_with(default_exercises);

        let exercise = exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or_else(|| RehabilitationError::ExerciseNotFound(exercise_id.to_string()))?;

        if !exercise.completed {
            exercise.completed = true;
            info!(patient_id, exercise_id, "Exercise completed");
        }

        Ok(ExercisePlan::new(exercises.clone()))
    }

    pub async fn reset(&self, patient_id: &str) -> ExercisePlan {
        let exercises = default_exercises();
        let mut plans = self.plans.write().await;
        plans.insert(patient_id.to_string(), exercises.clone());

        debug!("Exercise plan reset for {}", patient_id);
        ExercisePlan::new(exercises)
    }
}

pub fn default_exercises() -> Vec<Exercise> {
    let exercise = |id: &str, name: &str, duration: &str, sets, reps, completed, difficulty| Exercise {
        id: id.to_string(),
        name: name.to_string(),
        duration: duration.to_string(),
        sets,
        reps,
        completed,
        difficulty,
    };

    vec![
        exercise("1", "Shoulder Rolls", "5 min", 3, 10, true, Difficulty::Easy),
        exercise("2", "Leg Extensions", "8 min", 2, 15, true, Difficulty::Medium),
        exercise("3", "Core Strengthening", "12 min", 3, 12, false, Difficulty::Medium),
        exercise("4", "Balance Training", "10 min", 2, 8, false, Difficulty::Hard),
        exercise("5", "Range of Motion", "6 min", 1, 20, false, Difficulty::Easy),
    ]
}

/// The last four weeks of sessions, oldest first.
pub fn weekly_progress() -> Vec<WeeklyProgress> {
    vec![
        WeeklyProgress::new("Week 1", 12, 15),
        WeeklyProgress::new("Week 2", 18, 20),
        WeeklyProgress::new("Week 3", 22, 25),
        WeeklyProgress::new("Week 4", 19, 25),
    ]
}

/// First orthopedic surgeon in the directory, or the fourth doctor listed
/// when there is none.
pub fn session_doctor(catalog: &DoctorCatalog) -> Result<RehabSession, RehabilitationError> {
    let doctors = catalog.doctors();
    let doctor = match directory::first_with_specialty(doctors, REHABILITATION_SPECIALTY) {
        Some(doctor) => doctor,
        None => {
            warn!("No {} in the directory, using fallback doctor", REHABILITATION_SPECIALTY);
            doctors.get(3).ok_or(RehabilitationError::NoDoctorAvailable)?
        }
    };

    Ok(RehabSession {
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        specialty: doctor.specialty.clone(),
        hospital: doctor.hospital.clone(),
        booking_link: format!("/booking?doctor={}", doctor.id),
    })
}
