use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::DirectoryQuery;
use crate::services::{directory, DoctorCatalog};

// ==============================================================================
// PUBLIC DIRECTORY HANDLERS (NO AUTHENTICATION REQUIRED)
// ==============================================================================

#[axum::debug_handler]
pub async fn search_doctors(
    State(catalog): State<Arc<DoctorCatalog>>,
    Query(criteria): Query<DirectoryQuery>,
) -> Result<Json<Value>, AppError> {
    debug!("Searching doctors with criteria: {:?}", criteria);

    let doctors = directory::query(catalog.doctors(), &criteria);
    let summary = directory::result_summary(doctors.len(), criteria.active_search_term());

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len(),
        "summary": summary,
        "sort_by": criteria.sort_by,
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(catalog): State<Arc<DoctorCatalog>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = directory::find_by_id(catalog.doctors(), &doctor_id)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_filters(
    State(catalog): State<Arc<DoctorCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(directory::filters(catalog.doctors()))))
}
