// libs/appointment-cell/src/services/booking.rs
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::models::DoctorRecord;
use doctor_cell::services::{directory, DoctorCatalog};
use shared_models::auth::User;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, AppointmentSummary,
    BookAppointmentRequest, TimeSlot, UpcomingAppointment, DEFAULT_APPOINTMENT_MINUTES,
};
use crate::services::calendar;
use crate::services::slots::SlotExclusion;

/// Appointments made during this process's lifetime. Cloning shares the
/// same book.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books a slot with a doctor from `catalog` for `patient`.
    ///
    /// Only required fields are checked: a doctor and a slot must be chosen
    /// and the doctor must exist. Overlaps with other bookings are allowed.
    pub async fn book(
        &self,
        catalog: &DoctorCatalog,
        patient: &User,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let doctor = resolve_doctor(catalog, request.doctor_id.as_deref())?;
        let scheduled_for = request.scheduled_for.ok_or_else(|| {
            AppointmentError::MissingField("Please select an appointment date and time".to_string())
        })?;

        debug!("Booking {} with doctor {} at {}", patient.id, doctor.id, scheduled_for);

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: patient.id.clone(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            scheduled_for,
            duration_minutes: DEFAULT_APPOINTMENT_MINUTES,
            appointment_type: request.appointment_type,
            notes: request.notes.filter(|notes| !notes.trim().is_empty()),
            status: AppointmentStatus::Upcoming,
            created_at: Utc::now(),
        };

        let mut appointments = self.appointments.write().await;
        appointments.push(appointment.clone());

        info!(
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            "Appointment booked for {}", appointment.scheduled_for
        );

        Ok(appointment)
    }

    /// The patient's appointments ordered by start time.
    pub async fn for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        let mut mine: Vec<Appointment> = appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        mine.sort_by_key(|a| a.scheduled_for);
        mine
    }

    /// Marks the patient's appointments that ended by `now` as completed and
    /// returns how many changed.
    pub async fn settle_elapsed(&self, patient_id: &str, now: NaiveDateTime) -> usize {
        let mut appointments = self.appointments.write().await;
        let mut settled = 0;
        for appointment in appointments.iter_mut().filter(|a| {
            a.patient_id == patient_id
                && a.status == AppointmentStatus::Upcoming
                && a.scheduled_end_time() <= now
        }) {
            appointment.status = AppointmentStatus::Completed;
            settled += 1;
        }

        if settled > 0 {
            debug!("Completed {} elapsed appointments for {}", settled, patient_id);
        }
        settled
    }

    /// Upcoming appointments from `now` on, labelled for the dashboard.
    /// Elapsed ones are settled first.
    pub async fn upcoming(&self, patient_id: &str, now: NaiveDateTime) -> Vec<UpcomingAppointment> {
        self.settle_elapsed(patient_id, now).await;

        self.for_patient(patient_id)
            .await
            .into_iter()
            .filter(|a| a.status == AppointmentStatus::Upcoming && a.scheduled_for >= now)
            .map(|appointment| UpcomingAppointment {
                day_label: calendar::relative_date(appointment.scheduled_for.date(), now.date()),
                time_label: calendar::format_time(appointment.scheduled_for),
                is_soon: calendar::is_within_next_day(appointment.scheduled_for, now),
                appointment,
            })
            .collect()
    }

    pub async fn cancel(&self, patient_id: &str, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or(AppointmentError::NotFound)?;

        if appointment.patient_id != patient_id {
            return Err(AppointmentError::Unauthorized);
        }
        if appointment.status != AppointmentStatus::Upcoming {
            return Err(AppointmentError::InvalidStatusTransition(appointment.status));
        }

        appointment.status = AppointmentStatus::Cancelled;
        info!(appointment_id = %appointment.id, "Appointment cancelled");

        Ok(appointment.clone())
    }

    /// Start times already taken with `doctor_id` on `day`.
    pub async fn booked_slots(&self, doctor_id: &str, day: NaiveDate) -> BookedSlots {
        let appointments = self.appointments.read().await;
        BookedSlots {
            taken: appointments
                .iter()
                .filter(|a| a.doctor_id == doctor_id && a.is_active() && a.scheduled_for.date() == day)
                .map(|a| a.scheduled_for)
                .collect(),
        }
    }

    pub async fn len(&self) -> usize {
        self.appointments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.appointments.read().await.is_empty()
    }
}

fn resolve_doctor<'a>(
    catalog: &'a DoctorCatalog,
    doctor_id: Option<&str>,
) -> Result<&'a DoctorRecord, AppointmentError> {
    let doctor_id = doctor_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppointmentError::MissingField("Please choose a doctor".to_string()))?;

    directory::find_by_id(catalog.doctors(), doctor_id).ok_or(AppointmentError::DoctorNotFound)
}

/// Snapshot of a doctor's taken start times, usable as a slot filter.
#[derive(Debug, Clone, Default)]
pub struct BookedSlots {
    taken: HashSet<NaiveDateTime>,
}

impl BookedSlots {
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

impl SlotExclusion for BookedSlots {
    fn is_excluded(&self, slot: &TimeSlot) -> bool {
        self.taken.contains(&slot.start)
    }
}

pub fn summarize(appointment: &Appointment) -> AppointmentSummary {
    AppointmentSummary {
        when: calendar::format_date_time(appointment.scheduled_for),
        duration: calendar::format_duration(appointment.duration_minutes),
        appointment_type: appointment.appointment_type.label().to_string(),
    }
}
