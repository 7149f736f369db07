//! Authorization guard.
//!
//! A pure decision function over an optional identity and a requested action.
//! It has no side effects and touches no storage; actions call it before
//! dispatching to a repository.

use crate::session::Identity;
use crate::ServiceError;

/// The actions the guard knows how to judge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtectedAction {
    ListTalks,
    CreateTalk,
    UpdateTalk,
    ToggleTalkSelection,
    DeleteTalk,
    /// Profile updates are the one ownership-checked action: the caller must
    /// be the target user.
    UpdateProfile { target_user_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl From<DenyReason> for ServiceError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::NotAuthenticated => ServiceError::NotAuthenticated,
            DenyReason::Forbidden => ServiceError::Forbidden,
        }
    }
}

/// Decides whether `identity` may perform `action`.
///
/// Every talk action requires some identity; only `UpdateProfile` checks who
/// that identity is. Talk mutation is deliberately not gated on authorship
/// (the `author_name` tag exists for filtering, not for authorization).
pub fn authorize(identity: Option<&Identity>, action: &ProtectedAction) -> Decision {
    let Some(identity) = identity else {
        return Decision::Deny(DenyReason::NotAuthenticated);
    };

    match action {
        ProtectedAction::ListTalks
        | ProtectedAction::CreateTalk
        | ProtectedAction::UpdateTalk
        | ProtectedAction::ToggleTalkSelection
        | ProtectedAction::DeleteTalk => Decision::Allow,
        ProtectedAction::UpdateProfile { target_user_id } => {
            if identity.user_id == *target_user_id {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::Forbidden)
            }
        }
    }
}

/// Convenience for actions: authorize or fail, returning the proven identity.
pub fn require<'a>(
    identity: Option<&'a Identity>,
    action: &ProtectedAction,
) -> Result<&'a Identity, ServiceError> {
    match authorize(identity, action) {
        // authorize only allows when an identity is present
        Decision::Allow => identity.ok_or(ServiceError::NotAuthenticated),
        Decision::Deny(reason) => Err(reason.into()),
    }
}
