use chrono::Utc;

use crate::events::{dispatch, ServiceEvent};
use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::{ServiceError, Talk, TalkRepository};

pub struct DeleteTalkAction<T: TalkRepository> {
    talk_repository: T,
}

impl<T: TalkRepository> DeleteTalkAction<T> {
    pub fn new(talk_repository: T) -> Self {
        DeleteTalkAction { talk_repository }
    }

    /// Removes the talk by id.
    ///
    /// Deleting a record that is already gone is `NotFound`; deletion is not
    /// idempotent. Authorship is not checked.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_talk", skip_all, err)
    )]
    pub async fn execute(
        &self,
        identity: Option<&Identity>,
        talk: &Talk,
    ) -> Result<(), ServiceError> {
        guard::require(identity, &ProtectedAction::DeleteTalk)?;

        self.talk_repository.delete_talk(talk.id).await?;

        dispatch(ServiceEvent::TalkDeleted {
            talk_id: talk.id,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "lectern",
            "msg=\"talk deleted\" talk_id={}",
            talk.id
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockTalkRepository, TalkDraft, TalkRepository};

    fn identity() -> Identity {
        Identity {
            user_id: 1,
            username: "alice".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = MockTalkRepository::new();
        let talk = repo
            .create_talk(TalkDraft::mock("Talk A"), "alice", 1)
            .await
            .unwrap();

        let action = DeleteTalkAction::new(repo.clone());
        let caller = identity();

        action.execute(Some(&caller), &talk).await.unwrap();
        assert!(repo.list_talks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = MockTalkRepository::new();
        let talk = repo
            .create_talk(TalkDraft::mock("Talk A"), "alice", 1)
            .await
            .unwrap();

        let action = DeleteTalkAction::new(repo);
        let caller = identity();

        action.execute(Some(&caller), &talk).await.unwrap();
        let result = action.execute(Some(&caller), &talk).await;
        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_requires_identity() {
        let repo = MockTalkRepository::new();
        let talk = repo
            .create_talk(TalkDraft::mock("Talk A"), "alice", 1)
            .await
            .unwrap();

        let action = DeleteTalkAction::new(repo);
        let result = action.execute(None, &talk).await;
        assert_eq!(result.unwrap_err(), ServiceError::NotAuthenticated);
    }
}
