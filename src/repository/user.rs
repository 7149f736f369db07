use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Natural key: login lookups and talk authorship tags both go by username.
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "mocks"))]
impl User {
    pub fn mock() -> Self {
        let now = Utc::now();
        User {
            id: 1,
            username: "testuser".to_owned(),
            hashed_password: "fakehashedpassword".to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mock_from_credentials(username: &str, hashed_password: &str) -> Self {
        let now = Utc::now();
        User {
            id: 1,
            username: username.to_owned(),
            hashed_password: hashed_password.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Storage for user accounts.
///
/// Repositories assign ids on insert; a draft never carries one. Users are
/// never deleted by this crate.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ServiceError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
    async fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
    ) -> Result<User, ServiceError>;
    /// Full-record overwrite by id. Fails with `NotFound` if the id is absent.
    async fn update_user(
        &self,
        user_id: i64,
        username: &str,
        hashed_password: &str,
    ) -> Result<User, ServiceError>;
}
