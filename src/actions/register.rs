use chrono::Utc;

use crate::crypto::PasswordHasher;
use crate::events::{dispatch, ServiceEvent};
use crate::validators::{validate_password, validate_username};
use crate::{ServiceError, User, UserRepository};

pub struct RegisterAction<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    hasher: P,
}

impl<U: UserRepository, P: PasswordHasher> RegisterAction<U, P> {
    pub fn new(user_repository: U, hasher: P) -> Self {
        RegisterAction {
            user_repository,
            hasher,
        }
    }

    /// Registers a new user with a hashed password.
    ///
    /// The uniqueness check is check-then-insert, not transactional: two
    /// concurrent registrations with the same username can both pass the
    /// lookup. Sequential calls are reliable; closing the race needs a
    /// uniqueness constraint in the backing store.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register", skip_all, err)
    )]
    pub async fn execute(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        validate_username(username)?;
        validate_password(password)?;

        if self
            .user_repository
            .find_user_by_username(username)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicateUsername);
        }

        let hashed = self
            .hasher
            .hash(password)
            .map_err(|_| ServiceError::RegistrationFailed)?;

        let user = self.user_repository.create_user(username, &hashed).await?;

        dispatch(ServiceEvent::UserRegistered {
            user_id: user.id,
            username: user.username.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "lectern",
            "msg=\"user registered\" user_id={}",
            user.id
        );

        Ok(user)
    }
}
