use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_utils::extractor::auth_middleware;
use shared_utils::SessionStore;

use crate::handlers;

pub fn auth_routes(sessions: SessionStore) -> Router {
    let public_routes = Router::new()
        .route("/sign-in", post(handlers::sign_in))
        .route("/demo", get(handlers::demo_credentials));

    let protected_routes = Router::new()
        .route("/sign-out", post(handlers::sign_out))
        .route("/me", get(handlers::get_current_user))
        .layer(middleware::from_fn_with_state(sessions.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(sessions)
}
