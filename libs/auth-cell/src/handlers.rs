use axum::{
    extract::{Extension, Json, State},
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::{SessionResponse, SignInRequest, User};
use shared_models::error::AppError;
use shared_utils::SessionStore;

use crate::models::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::services::session;

pub async fn sign_in(
    State(sessions): State<SessionStore>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Sign-in attempt");

    let session = session::sign_in(&sessions, request).await?;

    Ok(Json(SessionResponse {
        token: session.token,
        user: session.user,
    }))
}

pub async fn sign_out(
    State(sessions): State<SessionStore>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    session::sign_out(&sessions, auth.token()).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Signed out successfully"
    })))
}

pub async fn get_current_user(
    Extension(user): Extension<User>,
) -> Result<Json<User>, AppError> {
    Ok(Json(user))
}

pub async fn demo_credentials() -> Json<Value> {
    Json(json!({
        "email": DEMO_EMAIL,
        "password": DEMO_PASSWORD
    }))
}
