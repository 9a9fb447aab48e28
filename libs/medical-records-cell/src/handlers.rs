use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::SessionStore;

use crate::models::{RecordTab, RecordsQuery};
use crate::services::MedicalRecords;

#[derive(Clone)]
pub struct RecordsState {
    pub records: Arc<MedicalRecords>,
    pub sessions: SessionStore,
}

#[axum::debug_handler]
pub async fn get_tab_records(
    State(state): State<RecordsState>,
    Path(tab): Path<String>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Value>, AppError> {
    let tab: RecordTab = tab.parse()?;
    let records = state.records.records(tab, query.search_term.as_deref());
    let total = records.len();

    let mut body = json!(records);
    body["total"] = json!(total);
    Ok(Json(body))
}

#[axum::debug_handler]
pub async fn get_summary(
    State(state): State<RecordsState>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!(state.records.summary())))
}

#[axum::debug_handler]
pub async fn get_health_metrics(
    State(state): State<RecordsState>,
) -> Result<Json<Value>, AppError> {
    let metrics = state.records.health_metrics();

    Ok(Json(json!({
        "metrics": metrics,
        "total": metrics.len(),
    })))
}
