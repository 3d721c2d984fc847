use std::sync::Arc;

use landing_forge_extract::Section;

use super::legacy::repair_stored_idea;
use super::model::Idea;
use super::pipeline::{sections_from_response, CreationStage};
use super::IdeaId;
use crate::error::{GenerationError, IdeaError, Result};
use crate::generation::{build_generation_prompt, ModelClient};
use crate::store::IdeaStore;

/// Creates ideas from prompts and reads them back.
///
/// Holds no per-request state; clones share the same collaborators.
#[derive(Clone)]
pub struct IdeaService {
    model: Arc<dyn ModelClient>,
    store: Arc<dyn IdeaStore>,
    default_model: String,
}

impl IdeaService {
    pub fn new(
        model: Arc<dyn ModelClient>,
        store: Arc<dyn IdeaStore>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            model,
            store,
            default_model: default_model.into(),
        }
    }

    pub fn store(&self) -> &dyn IdeaStore {
        self.store.as_ref()
    }

    /// Generate, validate and persist a new idea.
    ///
    /// Makes exactly one model call. Any failure before the idea is saved
    /// aborts the attempt.
    pub async fn create(&self, prompt: &str, model: Option<&str>) -> Result<Idea> {
        if prompt.trim().is_empty() {
            return Err(IdeaError::InvalidInput("Prompt is required".to_string()));
        }
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.default_model.as_str());

        let sections = self.generate_sections(prompt, model).await.map_err(|err| {
            tracing::error!(stage = %err.stage(), model, error = %err, "idea generation failed");
            err
        })?;
        let idea = self.store.save(prompt, &sections).await?;

        tracing::info!(
            stage = %CreationStage::Persisted,
            idea_id = %idea.id,
            sections = idea.sections.len(),
            "idea created"
        );
        Ok(idea)
    }

    async fn generate_sections(
        &self,
        prompt: &str,
        model: &str,
    ) -> std::result::Result<Vec<Section>, GenerationError> {
        let outbound = build_generation_prompt(prompt);
        tracing::debug!(stage = %CreationStage::Requested, model, prompt = %outbound, "sending generation prompt");

        let raw = self.model.generate(&outbound, model).await?;
        sections_from_response(&raw)
    }

    /// Look up an idea, repairing legacy section shapes on the way out.
    ///
    /// An identifier that cannot be parsed is reported as not found.
    pub async fn find_one(&self, id: &str) -> Result<Idea> {
        let Ok(idea_id) = IdeaId::parse(id) else {
            return Err(IdeaError::NotFound(id.to_string()));
        };
        let stored = self
            .store
            .find_by_id(idea_id)
            .await?
            .ok_or_else(|| IdeaError::NotFound(id.to_string()))?;
        Ok(repair_stored_idea(stored))
    }
}
