use chrono::Utc;

use crate::crypto::PasswordHasher;
use crate::events::{dispatch, ServiceEvent};
use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::validators::{validate_password, validate_username};
use crate::{ServiceError, User, UserRepository};

/// The fields a user may overwrite on their own account.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user_id: i64,
    pub username: String,
    pub password: String,
}

pub struct UpdateProfileAction<U: UserRepository, P: PasswordHasher> {
    user_repository: U,
    hasher: P,
}

impl<U: UserRepository, P: PasswordHasher> UpdateProfileAction<U, P> {
    pub fn new(user_repository: U, hasher: P) -> Self {
        UpdateProfileAction {
            user_repository,
            hasher,
        }
    }

    /// Overwrites the caller's own user record.
    ///
    /// This is the one ownership-checked operation: the update's target id
    /// must match the calling identity, otherwise `Forbidden` and the target
    /// record is left untouched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_profile", skip_all, err)
    )]
    pub async fn execute(
        &self,
        identity: Option<&Identity>,
        update: ProfileUpdate,
    ) -> Result<User, ServiceError> {
        let identity = guard::require(
            identity,
            &ProtectedAction::UpdateProfile {
                target_user_id: update.user_id,
            },
        )?;

        validate_username(&update.username)?;
        validate_password(&update.password)?;

        let hashed = self.hasher.hash(&update.password)?;

        let user = self
            .user_repository
            .update_user(update.user_id, &update.username, &hashed)
            .await?;

        dispatch(ServiceEvent::ProfileUpdated {
            user_id: identity.user_id,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "lectern",
            "msg=\"profile updated\" user_id={}",
            user.id
        );

        Ok(user)
    }
}
