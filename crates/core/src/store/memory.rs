use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use landing_forge_extract::Section;
use tokio::sync::RwLock;

use super::{IdeaStore, StoreError};
use crate::idea::model::{Idea, StoredIdea};
use crate::idea::IdeaId;

/// Process-local [`IdeaStore`]. Used when no database is configured, and by
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdeaStore {
    ideas: Arc<RwLock<HashMap<IdeaId, StoredIdea>>>,
}

impl MemoryIdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record verbatim, whatever the shape of its sections.
    pub async fn insert(&self, stored: StoredIdea) {
        self.ideas.write().await.insert(stored.id, stored);
    }

    pub async fn len(&self) -> usize {
        self.ideas.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ideas.read().await.is_empty()
    }
}

#[async_trait]
impl IdeaStore for MemoryIdeaStore {
    async fn save(&self, prompt: &str, sections: &[Section]) -> Result<Idea, StoreError> {
        let idea = Idea {
            id: IdeaId::generate(),
            prompt: prompt.to_string(),
            sections: sections.to_vec(),
            created_at: Utc::now(),
        };
        let stored = StoredIdea {
            id: idea.id,
            prompt: idea.prompt.clone(),
            sections: serde_json::to_value(sections).map_err(StoreError::Encode)?,
            created_at: idea.created_at,
        };
        self.insert(stored).await;
        Ok(idea)
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Option<StoredIdea>, StoreError> {
        Ok(self.ideas.read().await.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
