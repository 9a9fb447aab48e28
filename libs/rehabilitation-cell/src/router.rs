use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, RehabState};

pub fn rehabilitation_routes(state: RehabState) -> Router {
    Router::new()
        .route("/plan", get(handlers::get_plan))
        .route("/exercises/{exercise_id}/complete", post(handlers::complete_exercise))
        .route("/reset", post(handlers::reset_plan))
        .route("/progress", get(handlers::get_weekly_progress))
        .route("/session", get(handlers::get_session_doctor))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), auth_middleware))
        .with_state(state)
}
