use chrono::Utc;

use crate::events::{dispatch, ServiceEvent};
use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::{ServiceError, Talk, TalkRepository};

pub struct ToggleSelectAction<T: TalkRepository> {
    talk_repository: T,
}

impl<T: TalkRepository> ToggleSelectAction<T> {
    pub fn new(talk_repository: T) -> Self {
        ToggleSelectAction { talk_repository }
    }

    /// Flips `is_selected` on exactly the named talk.
    ///
    /// Selection is independent per record; toggling one talk never
    /// unselects another. Toggling twice restores the original state.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "toggle_select", skip_all, err)
    )]
    pub async fn execute(
        &self,
        identity: Option<&Identity>,
        talk_id: i64,
    ) -> Result<Talk, ServiceError> {
        guard::require(identity, &ProtectedAction::ToggleTalkSelection)?;

        let talk = self.talk_repository.toggle_selected(talk_id).await?;

        dispatch(ServiceEvent::TalkSelectionToggled {
            talk_id: talk.id,
            is_selected: talk.is_selected,
            at: Utc::now(),
        })
        .await;

        Ok(talk)
    }
}
