// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_config::{clinic_hours_are_valid, AppConfig};
use shared_models::error::AppError;

pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 30;

// ==============================================================================
// SLOT MODELS
// ==============================================================================

/// A bookable instant in clinic-local time. Slots are generated per day and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
}

impl TimeSlot {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// Opening window used to lay out slots: `[open_hour, close_hour)` stepped by
/// `interval_minutes` within each hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub open_hour: u32,
    pub close_hour: u32,
    pub interval_minutes: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            open_hour: 9,
            close_hour: 17,
            interval_minutes: 30,
        }
    }
}

impl SlotConfig {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            open_hour: config.clinic_open_hour,
            close_hour: config.clinic_close_hour,
            interval_minutes: config.slot_interval_minutes,
        }
    }

    pub fn is_valid(&self) -> bool {
        clinic_hours_are_valid(self.open_hour, self.close_hour, self.interval_minutes)
    }
}

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub scheduled_for: NaiveDateTime,
    pub duration_minutes: u32,
    pub appointment_type: AppointmentType,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn scheduled_end_time(&self) -> NaiveDateTime {
        self.scheduled_for + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn is_active(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    #[default]
    Video,
    #[serde(alias = "in-person")]
    InPerson,
}

impl AppointmentType {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentType::Video => "Video Consultation",
            AppointmentType::InPerson => "In-Person Visit",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Video => write!(f, "video"),
            AppointmentType::InPerson => write!(f, "in_person"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub scheduled_for: Option<NaiveDateTime>,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub notes: Option<String>,
}

/// What the booking form shows back once an appointment is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub when: String,
    pub duration: String,
    pub appointment_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub day_label: String,
    pub time_label: String,
    pub is_soon: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
    pub doctor_id: Option<String>,
}

// ==============================================================================
// ERROR MODELS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("{0}")]
    MissingField(String),

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error("Unauthorized access to appointment")]
    Unauthorized,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound | AppointmentError::DoctorNotFound => {
                AppError::NotFound(err.to_string())
            }
            AppointmentError::MissingField(msg) => AppError::ValidationError(msg),
            AppointmentError::InvalidStatusTransition(_) => AppError::Conflict(err.to_string()),
            AppointmentError::Unauthorized => AppError::Auth(err.to_string()),
        }
    }
}
