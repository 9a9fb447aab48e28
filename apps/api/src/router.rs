use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::handlers::AppointmentState;
use appointment_cell::router::appointment_routes;
use appointment_cell::services::AppointmentBook;
use auth_cell::router::auth_routes;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorCatalog;
use medical_records_cell::handlers::RecordsState;
use medical_records_cell::router::records_routes;
use medical_records_cell::MedicalRecords;
use rehabilitation_cell::handlers::RehabState;
use rehabilitation_cell::router::rehabilitation_routes;
use rehabilitation_cell::RehabilitationTracker;
use shared_config::AppConfig;
use shared_utils::SessionStore;

/// Process-wide state. Sessions are created here once so that a token issued
/// by `/auth` is honoured by every other cell.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<DoctorCatalog>,
    pub records: Arc<MedicalRecords>,
    pub sessions: SessionStore,
    pub book: AppointmentBook,
    pub tracker: RehabilitationTracker,
}

impl AppContext {
    pub fn new(config: Arc<AppConfig>, catalog: Arc<DoctorCatalog>, records: Arc<MedicalRecords>) -> Self {
        Self {
            config,
            catalog,
            records,
            sessions: SessionStore::new(),
            book: AppointmentBook::new(),
            tracker: RehabilitationTracker::new(),
        }
    }
}

pub fn create_router(context: AppContext) -> Router {
    let appointments = AppointmentState {
        config: context.config.clone(),
        catalog: context.catalog.clone(),
        book: context.book.clone(),
        sessions: context.sessions.clone(),
    };
    let records = RecordsState {
        records: context.records.clone(),
        sessions: context.sessions.clone(),
    };
    let rehabilitation = RehabState {
        tracker: context.tracker.clone(),
        catalog: context.catalog.clone(),
        sessions: context.sessions.clone(),
    };

    Router::new()
        .route("/", get(|| async { "Telecare API is running!" }))
        .nest("/auth", auth_routes(context.sessions.clone()))
        .nest("/doctors", doctor_routes(context.catalog.clone()))
        .nest("/appointments", appointment_routes(appointments))
        .nest("/records", records_routes(records))
        .nest("/rehabilitation", rehabilitation_routes(rehabilitation))
}
