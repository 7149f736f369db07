use chrono::Utc;

use crate::events::{dispatch, ServiceEvent};
use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::validators::validate_title;
use crate::{ServiceError, Talk, TalkDraft, TalkRepository};

pub struct CreateTalkAction<T: TalkRepository> {
    talk_repository: T,
}

impl<T: TalkRepository> CreateTalkAction<T> {
    pub fn new(talk_repository: T) -> Self {
        CreateTalkAction { talk_repository }
    }

    /// Persists a new talk with the authorship tag stamped from the creating
    /// identity. The tag is set once here and never recomputed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_talk", skip_all, err)
    )]
    pub async fn execute(
        &self,
        identity: Option<&Identity>,
        draft: TalkDraft,
    ) -> Result<Talk, ServiceError> {
        let identity = guard::require(identity, &ProtectedAction::CreateTalk)?;

        validate_title(&draft.title)?;

        let talk = self
            .talk_repository
            .create_talk(draft, &identity.username, identity.user_id)
            .await?;

        dispatch(ServiceEvent::TalkCreated {
            talk_id: talk.id,
            author_name: talk.author_name.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "lectern",
            "msg=\"talk created\" talk_id={} user_id={}",
            talk.id,
            identity.user_id
        );

        Ok(talk)
    }
}
