// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    Json,
};
use chrono::Local;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use doctor_cell::services::{directory, DoctorCatalog};
use shared_config::AppConfig;
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_utils::SessionStore;

use crate::models::{AppointmentError, BookAppointmentRequest, SlotConfig, SlotQuery};
use crate::services::booking::{self, AppointmentBook};
use crate::services::calendar;
use crate::services::slots::{generate_available_slots, generate_slots};

/// Everything the appointment routes share.
#[derive(Clone)]
pub struct AppointmentState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<DoctorCatalog>,
    pub book: AppointmentBook,
    pub sessions: SessionStore,
}

// ==============================================================================
// PUBLIC SLOT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<AppointmentState>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let config = SlotConfig::from_config(&state.config);
    let doctor_id = query.doctor_id.as_deref().filter(|id| !id.is_empty());

    if let Some(id) = doctor_id {
        directory::find_by_id(state.catalog.doctors(), id)
            .ok_or(AppointmentError::DoctorNotFound)?;
    }

    let slots = match doctor_id {
        Some(id) if state.config.hide_booked_slots => {
            let taken = state.book.booked_slots(id, query.date).await;
            debug!("Hiding {} booked slots for doctor {}", taken.len(), id);
            generate_available_slots(query.date, &config, &taken)
        }
        _ => generate_slots(query.date, &config),
    };

    let slots: Vec<Value> = slots
        .iter()
        .map(|slot| {
            json!({
                "start": slot.start,
                "label": calendar::format_time(slot.start),
            })
        })
        .collect();

    Ok(Json(json!({
        "date": query.date,
        "date_label": calendar::format_date(query.date),
        "slots": slots,
        "total": slots.len(),
    })))
}

// ==============================================================================
// PROTECTED APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.book.book(&state.catalog, &user, request).await?;
    let summary = booking::summarize(&appointment);

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "summary": summary,
        "message": format!("Appointment booked with {}", appointment.doctor_name),
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let now = Local::now().naive_local();
    state.book.settle_elapsed(&user.id, now).await;
    let appointments = state.book.for_patient(&user.id).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len(),
    })))
}

#[axum::debug_handler]
pub async fn get_upcoming_appointments(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    let now = Local::now().naive_local();
    let appointments = state.book.upcoming(&user.id, now).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len(),
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentState>,
    Extension(user): Extension<User>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let appointment = state.book.cancel(&user.id, appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment cancelled successfully",
    })))
}
