use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

/// Specialty whose doctors run rehabilitation video sessions.
pub const REHABILITATION_SPECIALTY: &str = "Orthopedic Surgeon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub sets: u32,
    pub reps: u32,
    pub completed: bool,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanProgress {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, rounded half away from zero.
    pub completion_rate: u32,
}

impl PlanProgress {
    pub fn of(exercises: &[Exercise]) -> Self {
        let completed = exercises.iter().filter(|e| e.completed).count();
        Self {
            completed,
            total: exercises.len(),
            completion_rate: percentage(completed, exercises.len()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExercisePlan {
    pub exercises: Vec<Exercise>,
    pub progress: PlanProgress,
}

impl ExercisePlan {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let progress = PlanProgress::of(&exercises);
        Self { exercises, progress }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyProgress {
    pub week: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl WeeklyProgress {
    pub fn new(week: &str, completed: usize, total: usize) -> Self {
        Self {
            week: week.to_string(),
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }
}

/// Who to book for a rehabilitation video call and where the booking form
/// should open.
#[derive(Debug, Clone, Serialize)]
pub struct RehabSession {
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub hospital: String,
    pub booking_link: String,
}

pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RehabilitationError {
    #[error("Exercise not found: {0}")]
    ExerciseNotFound(String),

    #[error("No rehabilitation doctor available")]
    NoDoctorAvailable,
}

impl From<RehabilitationError> for AppError {
    fn from(err: RehabilitationError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
