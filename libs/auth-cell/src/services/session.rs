use tracing::{debug, info};

use shared_models::auth::{SignInRequest, User};
use shared_utils::{Session, SessionStore};

use crate::models::SessionError;

/// Opens a session for any non-empty email and password. There is no account
/// store behind this, so the password is only checked for presence.
pub async fn sign_in(sessions: &SessionStore, request: SignInRequest) -> Result<Session, SessionError> {
    let email = request.email.trim();
    if email.is_empty() || request.password.trim().is_empty() {
        return Err(SessionError::MissingCredentials);
    }

    let user = User::from_email(email.to_lowercase(), email);
    let session = sessions.create(user).await;

    info!(user_id = %session.user.id, "User signed in");
    Ok(session)
}

pub async fn sign_out(sessions: &SessionStore, token: &str) -> Result<Session, SessionError> {
    let session = sessions.remove(token).await.ok_or(SessionError::SessionNotFound)?;

    info!(user_id = %session.user.id, "User signed out");
    Ok(session)
}

pub async fn current(sessions: &SessionStore, token: &str) -> Result<User, SessionError> {
    debug!("Resolving current session user");

    sessions
        .get(token)
        .await
        .map(|session| session.user)
        .ok_or(SessionError::SessionNotFound)
}
