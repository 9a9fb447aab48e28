use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};

use doctor_cell::services::DoctorCatalog;
use shared_models::auth::User;
use shared_models::error::AppError;
use shared_utils::SessionStore;

use crate::services::tracker::{self, RehabilitationTracker};

#[derive(Clone)]
pub struct RehabState {
    pub tracker: RehabilitationTracker,
    pub catalog: Arc<DoctorCatalog>,
    pub sessions: SessionStore,
}

#[axum::debug_handler]
pub async fn get_plan(
    State(state): State<RehabState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(state.tracker.plan(&user.id).await)))
}

#[axum::debug_handler]
pub async fn complete_exercise(
    State(state): State<RehabState>,
    Extension(user): Extension<User>,
    Path(exercise_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let plan = state.tracker.complete(&user.id, &exercise_id).await?;
    Ok(Json(json!(plan)))
}

#[axum::debug_handler]
pub async fn reset_plan(
    State(state): State<RehabState>,
    Extension(user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(state.tracker.reset(&user.id).await)))
}

pub async fn get_weekly_progress() -> Result<Json<Value>, AppError> {
    let weeks = tracker::weekly_progress();

    Ok(Json(json!({
        "weeks": weeks,
        "total": weeks.len(),
    })))
}

#[axum::debug_handler]
pub async fn get_session_doctor(
    State(state): State<RehabState>,
) -> Result<Json<Value>, AppError> {
    let session = tracker::session_doctor(&state.catalog)?;
    Ok(Json(json!(session)))
}
