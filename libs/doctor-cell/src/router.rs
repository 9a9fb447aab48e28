use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::DoctorCatalog;

pub fn doctor_routes(catalog: Arc<DoctorCatalog>) -> Router {
    // The directory is public; booking against it lives in the appointment cell
    Router::new()
        .route("/search", get(handlers::search_doctors))
        .route("/filters", get(handlers::get_filters))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(catalog)
}
