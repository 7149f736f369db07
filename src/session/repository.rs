//! Session repository trait.

use crate::ServiceError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{Session, SessionData};

/// Repository for session storage.
///
/// Implementations provide different storage backends;
/// [`InMemorySessionRepository`](super::InMemorySessionRepository) ships with
/// the crate for testing and single-instance deployments.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session and returns the session token.
    async fn create(&self, data: SessionData) -> Result<String, ServiceError>;

    /// Finds a session by its token.
    async fn find(&self, session_token: &str) -> Result<Option<Session>, ServiceError>;

    /// Extends a session's expiry time (for sliding window).
    async fn extend(
        &self,
        session_token: &str,
        new_expires_at: DateTime<Utc>,
    ) -> Result<(), ServiceError>;

    /// Destroys a session. Destroying an unknown token is a no-op.
    async fn destroy(&self, session_token: &str) -> Result<(), ServiceError>;

    /// Destroys all sessions for a user.
    async fn destroy_user_sessions(&self, user_id: i64) -> Result<(), ServiceError>;

    /// Removes expired sessions.
    ///
    /// Returns the number of sessions pruned.
    async fn prune_expired(&self) -> Result<u64, ServiceError>;
}
