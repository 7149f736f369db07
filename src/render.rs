//! View rendering seam.
//!
//! Rendering is an external collaborator: the core hands a template name and
//! a serializable context to a [`ViewRenderer`] and gets rendered output
//! back. Only the context-building logic lives here; no template engine does.

use async_trait::async_trait;
use serde::Serialize;

use crate::repository::{Talk, User};
use crate::ServiceError;

/// Renders a named template with a JSON context.
#[async_trait]
pub trait ViewRenderer: Send + Sync {
    async fn render(
        &self,
        template: &str,
        context: serde_json::Value,
    ) -> Result<String, ServiceError>;
}

/// Context for the landing page: the selected "next" talks plus the current
/// user's own submissions, partitioned out of the full snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContext {
    pub username: String,
    pub next_talks: Vec<Talk>,
    pub my_talks: Vec<Talk>,
}

impl HomeContext {
    /// Partitions a talk snapshot for the current user.
    ///
    /// `next_talks` are the selected ones; `my_talks` match on the authorship
    /// tag, not on the owning user id.
    pub fn build(username: impl Into<String>, talks: &[Talk]) -> Self {
        let username = username.into();
        let next_talks = talks.iter().filter(|t| t.is_selected).cloned().collect();
        let my_talks = talks
            .iter()
            .filter(|t| t.author_name == username)
            .cloned()
            .collect();

        Self {
            username,
            next_talks,
            my_talks,
        }
    }
}

/// Context for the full talk listing.
#[derive(Debug, Clone, Serialize)]
pub struct TalkListContext {
    pub title: String,
    pub username: String,
    pub talks: Vec<Talk>,
}

/// Context for the caller's own account page.
///
/// `User`'s `hashed_password` is marked skip-on-serialize, so the stored hash
/// never reaches a template.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileContext {
    pub user: User,
}

/// A renderer that echoes the template name and context, for tests.
#[cfg(any(test, feature = "mocks"))]
pub struct MockRenderer;

#[cfg(any(test, feature = "mocks"))]
#[async_trait]
impl ViewRenderer for MockRenderer {
    async fn render(
        &self,
        template: &str,
        context: serde_json::Value,
    ) -> Result<String, ServiceError> {
        Ok(format!("{template}:{context}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{TalkKind, TalkLevel};

    fn talk(id: i64, author: &str, is_selected: bool) -> Talk {
        Talk {
            id,
            title: format!("Talk {id}"),
            description: String::new(),
            kind: TalkKind::Talk,
            level: TalkLevel::Beginner,
            is_selected,
            author_name: author.to_owned(),
            owner_user_id: 1,
        }
    }

    #[test]
    fn test_home_context_partition() {
        let talks = vec![
            talk(1, "alice", true),
            talk(2, "bob", false),
            talk(3, "alice", false),
        ];

        let context = HomeContext::build("alice", &talks);

        assert_eq!(context.next_talks.len(), 1);
        assert_eq!(context.next_talks[0].id, 1);

        let my_ids: Vec<i64> = context.my_talks.iter().map(|t| t.id).collect();
        assert_eq!(my_ids, vec![1, 3]);
    }

    #[test]
    fn test_home_context_partitions_overlap() {
        // A selected talk of mine shows up in both lists
        let talks = vec![talk(1, "alice", true)];
        let context = HomeContext::build("alice", &talks);

        assert_eq!(context.next_talks.len(), 1);
        assert_eq!(context.my_talks.len(), 1);
    }

    #[test]
    fn test_profile_context_omits_stored_hash() {
        let context = ProfileContext { user: User::mock() };

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["user"]["username"], "testuser");
        assert!(value["user"].get("hashed_password").is_none());
    }

    #[tokio::test]
    async fn test_mock_renderer_echoes() {
        let renderer = MockRenderer;
        let output = renderer
            .render("index", serde_json::json!({ "title": "Events" }))
            .await
            .unwrap();

        assert!(output.starts_with("index:"));
        assert!(output.contains("Events"));
    }
}
