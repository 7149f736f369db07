//! In-memory session storage.
//!
//! Suitable for development, testing, and single-instance deployments.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::crypto::{generate_token, DEFAULT_TOKEN_LENGTH};
use crate::ServiceError;

use super::repository::SessionRepository;
use super::{Session, SessionData};

/// In-memory session storage.
///
/// Stores sessions in a `HashMap` protected by a `RwLock`, keyed by token.
///
/// # Note
///
/// Sessions are lost when the process restarts.
#[derive(Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl InMemorySessionRepository {
    /// Creates a new in-memory session repository.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of sessions currently stored.
    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if there are no sessions stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, data: SessionData) -> Result<String, ServiceError> {
        let session_token = generate_token(DEFAULT_TOKEN_LENGTH);

        self.sessions
            .write()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?
            .insert(session_token.clone(), data);

        Ok(session_token)
    }

    async fn find(&self, session_token: &str) -> Result<Option<Session>, ServiceError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?;

        Ok(sessions.get(session_token).map(|data| Session {
            id: session_token.to_owned(),
            data: data.clone(),
        }))
    }

    async fn extend(
        &self,
        session_token: &str,
        new_expires_at: DateTime<Utc>,
    ) -> Result<(), ServiceError> {
        if let Some(data) = self
            .sessions
            .write()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?
            .get_mut(session_token)
        {
            data.expires_at = new_expires_at;
        }

        Ok(())
    }

    async fn destroy(&self, session_token: &str) -> Result<(), ServiceError> {
        self.sessions
            .write()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?
            .remove(session_token);

        Ok(())
    }

    async fn destroy_user_sessions(&self, user_id: i64) -> Result<(), ServiceError> {
        self.sessions
            .write()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?
            .retain(|_, data| data.user_id != user_id);

        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    async fn prune_expired(&self) -> Result<u64, ServiceError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ServiceError::Storage("Lock poisoned".to_owned()))?;

        let now = Utc::now();
        let before_count = sessions.len();

        sessions.retain(|_, data| data.expires_at > now);

        let pruned = before_count.saturating_sub(sessions.len());
        Ok(u64::try_from(pruned).unwrap_or(u64::MAX))
    }
}
