#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ServiceError;

use super::talk::{Talk, TalkDraft, TalkRepository};

#[derive(Clone)]
pub struct MockTalkRepository {
    pub talks: Arc<Mutex<Vec<Talk>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockTalkRepository {
    pub fn new() -> Self {
        Self {
            talks: Arc::new(Mutex::new(vec![])),
            next_id: Arc::new(Mutex::new(1)),
        }
    }
}

impl Default for MockTalkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TalkRepository for MockTalkRepository {
    async fn find_talk_by_id(&self, id: i64) -> Result<Option<Talk>, ServiceError> {
        let talks = self.talks.lock().unwrap();
        Ok(talks.iter().find(|t| t.id == id).cloned())
    }

    async fn create_talk(
        &self,
        draft: TalkDraft,
        author_name: &str,
        owner_user_id: i64,
    ) -> Result<Talk, ServiceError> {
        let mut next_id = self.next_id.lock().unwrap();
        let talk = Talk {
            id: *next_id,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            level: draft.level,
            is_selected: false,
            author_name: author_name.to_owned(),
            owner_user_id,
        };
        *next_id += 1;
        drop(next_id);

        let mut talks = self.talks.lock().unwrap();
        talks.push(talk.clone());
        drop(talks);

        Ok(talk)
    }

    async fn list_talks(&self) -> Result<Vec<Talk>, ServiceError> {
        let talks = self.talks.lock().unwrap();
        Ok(talks.clone())
    }

    async fn update_talk(&self, talk: &Talk) -> Result<Talk, ServiceError> {
        let mut talks = self.talks.lock().unwrap();
        if let Some(existing) = talks.iter_mut().find(|t| t.id == talk.id) {
            *existing = talk.clone();
            Ok(existing.clone())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    async fn toggle_selected(&self, id: i64) -> Result<Talk, ServiceError> {
        let mut talks = self.talks.lock().unwrap();
        if let Some(talk) = talks.iter_mut().find(|t| t.id == id) {
            talk.is_selected = !talk.is_selected;
            Ok(talk.clone())
        } else {
            Err(ServiceError::NotFound)
        }
    }

    async fn delete_talk(&self, id: i64) -> Result<(), ServiceError> {
        let mut talks = self.talks.lock().unwrap();
        let len_before = talks.len();
        talks.retain(|t| t.id != id);
        if talks.len() < len_before {
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
