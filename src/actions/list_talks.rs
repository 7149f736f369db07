use crate::guard::{self, ProtectedAction};
use crate::session::Identity;
use crate::{ServiceError, Talk, TalkRepository};

pub struct ListTalksAction<T: TalkRepository> {
    talk_repository: T,
}

impl<T: TalkRepository> ListTalksAction<T> {
    pub fn new(talk_repository: T) -> Self {
        ListTalksAction { talk_repository }
    }

    /// Returns an unordered snapshot of all talks.
    ///
    /// Callers partition the snapshot themselves (selected vs. authored-by-me);
    /// see [`HomeContext::build`](crate::render::HomeContext::build).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_talks", skip_all, err)
    )]
    pub async fn execute(&self, identity: Option<&Identity>) -> Result<Vec<Talk>, ServiceError> {
        guard::require(identity, &ProtectedAction::ListTalks)?;

        self.talk_repository.list_talks().await
    }
}
