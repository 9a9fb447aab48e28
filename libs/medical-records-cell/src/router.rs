use axum::{middleware, routing::get, Router};

use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, RecordsState};

pub fn records_routes(state: RecordsState) -> Router {
    // Every records view belongs to the signed-in patient
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .route("/metrics", get(handlers::get_health_metrics))
        .route("/{tab}", get(handlers::get_tab_records))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), auth_middleware))
        .with_state(state)
}
