use chrono::Utc;

use crate::crypto::PasswordHasher;
use crate::events::{dispatch, ServiceEvent};
use crate::session::{Identity, SessionManager, SessionRepository};
use crate::{ServiceError, UserRepository};

pub struct LoginAction<U: UserRepository, S: SessionRepository, P: PasswordHasher> {
    user_repository: U,
    sessions: SessionManager<S>,
    hasher: P,
}

impl<U: UserRepository, S: SessionRepository, P: PasswordHasher> LoginAction<U, S, P> {
    pub fn new(user_repository: U, sessions: SessionManager<S>, hasher: P) -> Self {
        LoginAction {
            user_repository,
            sessions,
            hasher,
        }
    }

    /// Authenticates the credentials and binds a fresh session.
    ///
    /// An unknown username, a non-matching password, and an unreadable stored
    /// hash all collapse into `InvalidCredentials`; callers learn nothing
    /// about which it was.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all, err))]
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Identity, String), ServiceError> {
        if let Some(user) = self.user_repository.find_user_by_username(username).await? {
            if let Ok(true) = self.hasher.verify(password, &user.hashed_password) {
                let identity = Identity {
                    user_id: user.id,
                    username: user.username.clone(),
                };
                let token = self.sessions.start_session(&identity).await?;

                dispatch(ServiceEvent::LoginSuccess {
                    user_id: user.id,
                    username: user.username,
                    at: Utc::now(),
                })
                .await;

                log::info!(
                    target: "lectern",
                    "msg=\"login success\" user_id={}",
                    identity.user_id
                );

                return Ok((identity, token));
            }
        }

        dispatch(ServiceEvent::LoginFailed {
            username: username.to_owned(),
            reason: "invalid credentials".to_owned(),
            at: Utc::now(),
        })
        .await;

        Err(ServiceError::InvalidCredentials)
    }
}
