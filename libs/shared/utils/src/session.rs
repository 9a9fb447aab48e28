use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::auth::User;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
}

/// In-memory session registry shared by every router that needs to know who
/// is signed in. Cloning shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session for `user` under a fresh opaque token.
    pub async fn create(&self, user: User) -> Session {
        let session = Session {
            token: Uuid::new_v4().simple().to_string(),
            user,
            created_at: Utc::now(),
        };

        debug!("Opening session for user: {}", session.user.id);

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        session
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_remove() {
        let store = SessionStore::new();
        let session = store
            .create(User::from_email("demo@telecare.com", "demo@telecare.com"))
            .await;

        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(&session.token).await.map(|s| s.user.email),
            Some("demo@telecare.com".to_string())
        );

        assert!(store.remove(&session.token).await.is_some());
        assert!(store.get(&session.token).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_sessions() {
        let store = SessionStore::new();
        let other = store.clone();
        let session = store.create(User::from_email("a@b.c", "a@b.c")).await;
        assert!(other.get(&session.token).await.is_some());
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let store = SessionStore::new();
        let first = store.create(User::from_email("a@b.c", "a@b.c")).await;
        let second = store.create(User::from_email("a@b.c", "a@b.c")).await;
        assert_ne!(first.token, second.token);
        assert_eq!(store.len().await, 2);
    }
}
