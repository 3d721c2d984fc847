//! Durable-store collaborator.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use landing_forge_extract::Section;
use thiserror::Error;

use crate::idea::model::{Idea, StoredIdea};
use crate::idea::IdeaId;

pub use memory::MemoryIdeaStore;
pub use postgres::PgIdeaStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("sections could not be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored sections are not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Persists ideas and looks them up. The store assigns identifier and
/// creation time.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn save(&self, prompt: &str, sections: &[Section]) -> Result<Idea, StoreError>;

    /// Returns the record exactly as stored, legacy shapes included.
    async fn find_by_id(&self, id: IdeaId) -> Result<Option<StoredIdea>, StoreError>;

    /// Cheap liveness check for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;
}
