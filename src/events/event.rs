use chrono::{DateTime, Utc};

/// Events emitted by lectern actions.
///
/// Events are always fired from actions. If no listeners are registered,
/// they are silently ignored (no-op). Register listeners via
/// [`register_event_listeners`](crate::register_event_listeners).
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    // user lifecycle
    UserRegistered {
        user_id: i64,
        username: String,
        at: DateTime<Utc>,
    },
    ProfileUpdated {
        user_id: i64,
        at: DateTime<Utc>,
    },

    // authentication
    LoginSuccess {
        user_id: i64,
        username: String,
        at: DateTime<Utc>,
    },
    LoginFailed {
        username: String,
        reason: String,
        at: DateTime<Utc>,
    },
    LogoutSuccess {
        user_id: i64,
        at: DateTime<Utc>,
    },

    // talks
    TalkCreated {
        talk_id: i64,
        author_name: String,
        at: DateTime<Utc>,
    },
    TalkUpdated {
        talk_id: i64,
        at: DateTime<Utc>,
    },
    TalkSelectionToggled {
        talk_id: i64,
        is_selected: bool,
        at: DateTime<Utc>,
    },
    TalkDeleted {
        talk_id: i64,
        at: DateTime<Utc>,
    },
}

impl ServiceEvent {
    /// Returns a dot-separated event name for logging/tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserRegistered { .. } => "user.registered",
            Self::ProfileUpdated { .. } => "user.profile_updated",
            Self::LoginSuccess { .. } => "auth.login.success",
            Self::LoginFailed { .. } => "auth.login.failed",
            Self::LogoutSuccess { .. } => "auth.logout.success",
            Self::TalkCreated { .. } => "talk.created",
            Self::TalkUpdated { .. } => "talk.updated",
            Self::TalkSelectionToggled { .. } => "talk.selection_toggled",
            Self::TalkDeleted { .. } => "talk.deleted",
        }
    }

    /// Returns the timestamp when this event occurred.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::UserRegistered { at, .. }
            | Self::ProfileUpdated { at, .. }
            | Self::LoginSuccess { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LogoutSuccess { at, .. }
            | Self::TalkCreated { at, .. }
            | Self::TalkUpdated { at, .. }
            | Self::TalkSelectionToggled { at, .. }
            | Self::TalkDeleted { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let now = Utc::now();

        assert_eq!(
            ServiceEvent::UserRegistered {
                user_id: 1,
                username: "alice".to_owned(),
                at: now
            }
            .name(),
            "user.registered"
        );

        assert_eq!(
            ServiceEvent::LoginFailed {
                username: "alice".to_owned(),
                reason: "invalid password".to_owned(),
                at: now
            }
            .name(),
            "auth.login.failed"
        );

        assert_eq!(
            ServiceEvent::TalkSelectionToggled {
                talk_id: 3,
                is_selected: true,
                at: now
            }
            .name(),
            "talk.selection_toggled"
        );

        assert_eq!(
            ServiceEvent::TalkDeleted {
                talk_id: 3,
                at: now
            }
            .name(),
            "talk.deleted"
        );
    }

    #[test]
    fn test_event_timestamp() {
        let now = Utc::now();

        let event = ServiceEvent::LoginSuccess {
            user_id: 1,
            username: "alice".to_owned(),
            at: now,
        };

        assert_eq!(event.timestamp(), now);
    }
}
