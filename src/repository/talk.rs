use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkKind {
    Talk,
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkLevel {
    Beginner,
    Advanced,
}

/// A scheduled talk or demo.
///
/// `author_name` is a denormalized copy of the creating user's username,
/// stamped once at creation and never recomputed. It is used to filter "my
/// talks" in views, never for authorization. `owner_user_id` is a lookup-only
/// foreign key; deleting a user does not cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub kind: TalkKind,
    pub level: TalkLevel,
    pub is_selected: bool,
    pub author_name: String,
    pub owner_user_id: i64,
}

/// The user-supplied fields of a talk, before persistence stamps the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalkDraft {
    pub title: String,
    pub description: String,
    pub kind: TalkKind,
    pub level: TalkLevel,
}

#[cfg(any(test, feature = "mocks"))]
impl TalkDraft {
    pub fn mock(title: &str) -> Self {
        TalkDraft {
            title: title.to_owned(),
            description: "A mock talk".to_owned(),
            kind: TalkKind::Talk,
            level: TalkLevel::Beginner,
        }
    }
}

/// Storage for talk records.
///
/// The repository performs no identity checks; callers are expected to have
/// passed the authorization guard already.
#[async_trait]
pub trait TalkRepository: Send + Sync {
    async fn find_talk_by_id(&self, id: i64) -> Result<Option<Talk>, ServiceError>;

    /// Persists a new record. `author_name` and `owner_user_id` come from the
    /// creating identity; new talks start unselected.
    async fn create_talk(
        &self,
        draft: TalkDraft,
        author_name: &str,
        owner_user_id: i64,
    ) -> Result<Talk, ServiceError>;

    /// Unordered snapshot of all talks.
    async fn list_talks(&self) -> Result<Vec<Talk>, ServiceError>;

    /// Full-record overwrite by id. Fails with `NotFound` if the id is absent.
    async fn update_talk(&self, talk: &Talk) -> Result<Talk, ServiceError>;

    /// Flips `is_selected` on exactly the named record and returns it.
    ///
    /// Other records are untouched; several talks may end up selected at the
    /// same time.
    async fn toggle_selected(&self, id: i64) -> Result<Talk, ServiceError>;

    /// Removes by id. Fails with `NotFound` if the id is absent; a repeated
    /// delete of the same id is an error the second time.
    async fn delete_talk(&self, id: i64) -> Result<(), ServiceError>;
}
