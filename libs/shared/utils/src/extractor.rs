use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_models::error::AppError;

use crate::session::SessionStore;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    match auth_value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Auth("Invalid authorization header format".to_string())),
    }
}

// Resolves the bearer token to an open session and exposes its user to handlers
pub async fn auth_middleware(
    State(sessions): State<SessionStore>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers())?;

    let session = sessions
        .get(&token)
        .await
        .ok_or_else(|| AppError::Auth("Session not found or signed out".to_string()))?;

    request.extensions_mut().insert(session.user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn missing_header_is_auth_error() {
        let headers = HeaderMap::new();
        assert_matches!(
            extract_bearer_token(&headers),
            Err(AppError::Auth(msg)) if msg == "Missing authorization header"
        );
    }

    #[test]
    fn wrong_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc123"));
        assert_matches!(extract_bearer_token(&headers), Err(AppError::Auth(_)));

        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_matches!(extract_bearer_token(&headers), Err(AppError::Auth(_)));
    }
}
