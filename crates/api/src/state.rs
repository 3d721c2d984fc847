use std::sync::Arc;

use landing_forge_core::IdeaService;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    ideas: IdeaService,
    config: AppConfig,
}

impl AppState {
    pub fn new(ideas: IdeaService, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { ideas, config }),
        }
    }

    pub fn ideas(&self) -> &IdeaService {
        &self.inner.ideas
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
