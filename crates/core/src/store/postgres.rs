use async_trait::async_trait;
use chrono::{DateTime, Utc};
use landing_forge_extract::Section;
use sqlx::PgPool;
use uuid::Uuid;

use super::{IdeaStore, StoreError};
use crate::idea::model::{Idea, StoredIdea};
use crate::idea::IdeaId;

// `sections` is a JSON (not JSONB) column so legacy keyed objects keep their
// key order. It travels as text in both directions.
const INSERT_IDEA: &str = "INSERT INTO ideas (prompt, sections) VALUES ($1, $2::json) \
     RETURNING id, prompt, sections::text AS sections, created_at";

const SELECT_IDEA: &str =
    "SELECT id, prompt, sections::text AS sections, created_at FROM ideas WHERE id = $1";

/// Database row representation of an idea.
#[derive(Debug, sqlx::FromRow)]
struct IdeaRow {
    id: Uuid,
    prompt: String,
    sections: String,
    created_at: DateTime<Utc>,
}

impl IdeaRow {
    fn into_stored(self) -> Result<StoredIdea, StoreError> {
        Ok(StoredIdea {
            id: self.id.into(),
            prompt: self.prompt,
            sections: serde_json::from_str(&self.sections).map_err(StoreError::Decode)?,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL-backed [`IdeaStore`].
#[derive(Debug, Clone)]
pub struct PgIdeaStore {
    pool: PgPool,
}

impl PgIdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdeaStore for PgIdeaStore {
    async fn save(&self, prompt: &str, sections: &[Section]) -> Result<Idea, StoreError> {
        let encoded = serde_json::to_string(sections).map_err(StoreError::Encode)?;
        let row: IdeaRow = sqlx::query_as(INSERT_IDEA)
            .bind(prompt)
            .bind(encoded)
            .fetch_one(&self.pool)
            .await?;

        Ok(Idea {
            id: row.id.into(),
            prompt: row.prompt,
            sections: sections.to_vec(),
            created_at: row.created_at,
        })
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Option<StoredIdea>, StoreError> {
        let row: Option<IdeaRow> = sqlx::query_as(SELECT_IDEA)
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        row.map(IdeaRow::into_stored).transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
