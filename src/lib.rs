pub mod actions;
pub mod crypto;
pub mod events;
pub mod guard;
pub mod orchestrator;
pub mod render;
pub mod repository;
pub mod session;
pub mod validators;

pub use events::register_event_listeners;
pub use guard::{authorize, Decision, DenyReason, ProtectedAction};
pub use orchestrator::{LoginRedirect, Orchestrator, Outcome, Route};
pub use repository::{Talk, TalkDraft, TalkKind, TalkLevel, TalkRepository};
pub use repository::{User, UserRepository};
pub use session::{
    Identity, InMemorySessionRepository, RequestContext, Session, SessionConfig, SessionData,
    SessionManager, SessionRepository,
};

#[cfg(any(test, feature = "mocks"))]
pub use render::MockRenderer;
#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockTalkRepository, MockUserRepository};

use std::fmt;

use validators::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// No session token, or the token resolved to nothing.
    NotAuthenticated,
    /// Authenticated, but the identity may not perform the action.
    Forbidden,
    /// Unknown username or password mismatch at login.
    InvalidCredentials,
    /// Registration collision on the username natural key.
    DuplicateUsername,
    /// Update or delete target does not exist.
    NotFound,
    /// The hashing primitive failed while registering.
    RegistrationFailed,
    /// A stored password hash could not be parsed.
    PasswordHash,
    Validation(ValidationError),
    Storage(String),
    Render(String),
}

impl std::error::Error for ServiceError {}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotAuthenticated => write!(f, "Not authenticated"),
            ServiceError::Forbidden => write!(f, "Not permitted"),
            ServiceError::InvalidCredentials => write!(f, "Invalid username or password"),
            ServiceError::DuplicateUsername => write!(f, "Username is already taken"),
            ServiceError::NotFound => write!(f, "Record not found"),
            ServiceError::RegistrationFailed => write!(f, "Registration failed"),
            ServiceError::PasswordHash => write!(f, "Failed to process password hash"),
            ServiceError::Validation(err) => write!(f, "{}", err),
            ServiceError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ServiceError::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}
