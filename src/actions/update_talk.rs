use chrono::Utc;

use crate::events::{dispatch, ServiceEvent};
use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::validators::validate_title;
use crate::{ServiceError, Talk, TalkRepository};

pub struct UpdateTalkAction<T: TalkRepository> {
    talk_repository: T,
}

impl<T: TalkRepository> UpdateTalkAction<T> {
    pub fn new(talk_repository: T) -> Self {
        UpdateTalkAction { talk_repository }
    }

    /// Full-record overwrite by id.
    ///
    /// Any authenticated user may update any talk; authorship is not checked
    /// here. Last write wins; there is no version check before the overwrite.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_talk", skip_all, err)
    )]
    pub async fn execute(
        &self,
        identity: Option<&Identity>,
        talk: &Talk,
    ) -> Result<Talk, ServiceError> {
        guard::require(identity, &ProtectedAction::UpdateTalk)?;

        validate_title(&talk.title)?;

        let updated = self.talk_repository.update_talk(talk).await?;

        dispatch(ServiceEvent::TalkUpdated {
            talk_id: updated.id,
            at: Utc::now(),
        })
        .await;

        Ok(updated)
    }
}
