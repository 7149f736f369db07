//! The session manager: establishes, resolves, and tears down the binding
//! from a session token to an authenticated identity.

use chrono::Utc;

use crate::ServiceError;

use super::{Identity, RequestContext, SessionConfig, SessionData, SessionRepository};

/// Owns the token-to-identity mapping.
///
/// The state machine is deliberately small: `Anonymous` becomes
/// `Authenticated` through [`start_session`](Self::start_session) and returns
/// to `Anonymous` through [`end_session`](Self::end_session). Concurrent
/// sessions for the same user are independent.
#[derive(Clone)]
pub struct SessionManager<S: SessionRepository> {
    repository: S,
    config: SessionConfig,
}

impl<S: SessionRepository> SessionManager<S> {
    pub fn new(repository: S, config: SessionConfig) -> Self {
        Self { repository, config }
    }

    /// Binds an identity to a fresh session and returns its token.
    pub async fn start_session(&self, identity: &Identity) -> Result<String, ServiceError> {
        let now = Utc::now();
        let data = SessionData {
            user_id: identity.user_id,
            username: identity.username.clone(),
            created_at: now,
            expires_at: now + self.config.session_lifetime,
        };

        self.repository.create(data).await
    }

    /// Resolves the request's session token to an identity, if any.
    ///
    /// Expired sessions are destroyed on sight and resolve to `None`. With a
    /// sliding config, a hit pushes the expiry forward by a full lifetime.
    pub async fn resolve(&self, ctx: &RequestContext) -> Result<Option<Identity>, ServiceError> {
        let Some(token) = ctx.session_token.as_deref() else {
            return Ok(None);
        };

        let Some(session) = self.repository.find(token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.repository.destroy(token).await?;
            return Ok(None);
        }

        if self.config.sliding {
            let new_expires_at = Utc::now() + self.config.session_lifetime;
            self.repository.extend(token, new_expires_at).await?;
        }

        Ok(Some(session.identity()))
    }

    /// Clears the request's session binding.
    ///
    /// Idempotent: a missing or unknown token is a no-op, not an error.
    pub async fn end_session(&self, ctx: &RequestContext) -> Result<(), ServiceError> {
        if let Some(token) = ctx.session_token.as_deref() {
            self.repository.destroy(token).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::session::InMemorySessionRepository;

    fn identity() -> Identity {
        Identity {
            user_id: 1,
            username: "alice".to_owned(),
        }
    }

    fn manager(config: SessionConfig) -> SessionManager<InMemorySessionRepository> {
        SessionManager::new(InMemorySessionRepository::new(), config)
    }

    #[tokio::test]
    async fn test_start_then_resolve() {
        let manager = manager(SessionConfig::default());

        let token = manager.start_session(&identity()).await.unwrap();
        let ctx = RequestContext::with_token(token);

        let resolved = manager.resolve(&ctx).await.unwrap();
        assert_eq!(resolved, Some(identity()));
    }

    #[tokio::test]
    async fn test_resolve_without_token() {
        let manager = manager(SessionConfig::default());

        let resolved = manager.resolve(&RequestContext::anonymous()).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_resolve_unknown_token() {
        let manager = manager(SessionConfig::default());

        let ctx = RequestContext::with_token("never-issued");
        let resolved = manager.resolve(&ctx).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_resolves_to_none_and_is_destroyed() {
        let repo = InMemorySessionRepository::new();
        let config = SessionConfig {
            session_lifetime: -Duration::hours(1), // already expired at creation
            sliding: false,
        };
        let manager = SessionManager::new(repo.clone(), config);

        let token = manager.start_session(&identity()).await.unwrap();
        let ctx = RequestContext::with_token(token.clone());

        let resolved = manager.resolve(&ctx).await.unwrap();
        assert!(resolved.is_none());

        // Destroyed on sight, not just hidden
        assert!(repo.find(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_end_session_then_resolve() {
        let manager = manager(SessionConfig::default());

        let token = manager.start_session(&identity()).await.unwrap();
        let ctx = RequestContext::with_token(token);

        manager.end_session(&ctx).await.unwrap();
        let resolved = manager.resolve(&ctx).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_end_session_is_idempotent() {
        let manager = manager(SessionConfig::default());

        // No session at all
        assert!(manager
            .end_session(&RequestContext::anonymous())
            .await
            .is_ok());

        // Ending twice
        let token = manager.start_session(&identity()).await.unwrap();
        let ctx = RequestContext::with_token(token);
        assert!(manager.end_session(&ctx).await.is_ok());
        assert!(manager.end_session(&ctx).await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_sessions_are_independent() {
        let manager = manager(SessionConfig::default());

        let first = manager.start_session(&identity()).await.unwrap();
        let second = manager.start_session(&identity()).await.unwrap();
        assert_ne!(first, second);

        manager
            .end_session(&RequestContext::with_token(first))
            .await
            .unwrap();

        let resolved = manager
            .resolve(&RequestContext::with_token(second))
            .await
            .unwrap();
        assert!(resolved.is_some());
    }

    #[tokio::test]
    async fn test_sliding_window_extends_expiry() {
        let repo = InMemorySessionRepository::new();
        let config = SessionConfig {
            session_lifetime: Duration::hours(2),
            sliding: true,
        };
        let manager = SessionManager::new(repo.clone(), config);

        let token = manager.start_session(&identity()).await.unwrap();
        let before = repo.find(&token).await.unwrap().unwrap().data.expires_at;

        manager
            .resolve(&RequestContext::with_token(token.clone()))
            .await
            .unwrap();

        let after = repo.find(&token).await.unwrap().unwrap().data.expires_at;
        assert!(after >= before);
    }
}
