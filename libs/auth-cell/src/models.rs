use thiserror::Error;

use shared_models::error::AppError;

/// Credentials shown on the sign-in page. Any non-empty pair works.
pub const DEMO_EMAIL: &str = "demo@telecare.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Session not found")]
    SessionNotFound,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MissingCredentials => AppError::ValidationError(err.to_string()),
            SessionError::SessionNotFound => AppError::NotFound(err.to_string()),
        }
    }
}
