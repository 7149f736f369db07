use chrono::Utc;

use crate::events::{dispatch, ServiceEvent};
use crate::session::{RequestContext, SessionManager, SessionRepository};
use crate::ServiceError;

pub struct LogoutAction<S: SessionRepository> {
    sessions: SessionManager<S>,
}

impl<S: SessionRepository> LogoutAction<S> {
    pub fn new(sessions: SessionManager<S>) -> Self {
        LogoutAction { sessions }
    }

    /// Clears the request's session binding.
    ///
    /// Idempotent: logging out without an active session is a no-op.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "logout", skip_all, err)
    )]
    pub async fn execute(&self, ctx: &RequestContext) -> Result<(), ServiceError> {
        // resolve first so the event can carry the user id
        let identity = self.sessions.resolve(ctx).await?;

        self.sessions.end_session(ctx).await?;

        if let Some(identity) = identity {
            dispatch(ServiceEvent::LogoutSuccess {
                user_id: identity.user_id,
                at: Utc::now(),
            })
            .await;

            log::info!(
                target: "lectern",
                "msg=\"logout success\" user_id={}",
                identity.user_id
            );
        }

        Ok(())
    }
}
