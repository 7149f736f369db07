mod config;
mod manager;
mod memory_store;
mod repository;

use chrono::{DateTime, Utc};
pub use config::SessionConfig;
pub use manager::SessionManager;
pub use memory_store::InMemorySessionRepository;
pub use repository::SessionRepository;
use serde::{Deserialize, Serialize};

/// The authenticated-user value threaded explicitly through every call.
///
/// There is no ambient request state in this crate; whoever holds an
/// `Identity` got it from [`SessionManager::resolve`] or from a fresh login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
}

/// What the transport layer hands the core for each incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub session_token: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self {
            session_token: None,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            session_token: Some(token.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub data: SessionData,
}

impl Session {
    pub fn new(id: String, data: SessionData) -> Self {
        Self { id, data }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.data.expires_at
    }

    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.data.user_id,
            username: self.data.username.clone(),
        }
    }
}
