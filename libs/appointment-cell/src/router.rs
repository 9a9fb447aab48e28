// libs/appointment-cell/src/router.rs
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::handlers::{self, AppointmentState};

pub fn appointment_routes(state: AppointmentState) -> Router {
    // Slots are browsable before signing in
    let public_routes = Router::new()
        .route("/slots", get(handlers::get_slots));

    let protected_routes = Router::new()
        .route("/", post(handlers::book_appointment).get(handlers::list_appointments))
        .route("/upcoming", get(handlers::get_upcoming_appointments))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
