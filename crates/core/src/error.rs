use landing_forge_extract::MalformedResponse;
use thiserror::Error;

use crate::generation::ProviderError;
use crate::idea::pipeline::CreationStage;
use crate::idea::validate::MissingRequiredSections;
use crate::store::StoreError;

/// Condition kinds surfaced to callers. The HTTP layer decides status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    ProviderError,
    MalformedResponse,
    MissingRequiredSections,
    NotFound,
    StoreError,
}

/// Anything that can go wrong between calling the model and holding a
/// validated section list.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
    #[error(transparent)]
    MissingSections(#[from] MissingRequiredSections),
}

impl GenerationError {
    /// The creation stage the attempt failed in.
    pub fn stage(&self) -> CreationStage {
        match self {
            GenerationError::Provider(_) => CreationStage::Requested,
            GenerationError::Malformed(MalformedResponse::NoJsonObject(_)) => {
                CreationStage::ExtractingJson
            }
            GenerationError::Malformed(MalformedResponse::Unparseable(_)) => CreationStage::Parsing,
            GenerationError::MissingSections(_) => CreationStage::Validating,
        }
    }
}

#[derive(Debug, Error)]
pub enum IdeaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("AI generation or parsing failed: {0}")]
    GenerationFailed(#[from] GenerationError),

    #[error("idea not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IdeaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdeaError::InvalidInput(_) => ErrorKind::InvalidInput,
            IdeaError::GenerationFailed(GenerationError::Provider(_)) => ErrorKind::ProviderError,
            IdeaError::GenerationFailed(GenerationError::Malformed(_)) => {
                ErrorKind::MalformedResponse
            }
            IdeaError::GenerationFailed(GenerationError::MissingSections(_)) => {
                ErrorKind::MissingRequiredSections
            }
            IdeaError::NotFound(_) => ErrorKind::NotFound,
            IdeaError::Store(_) => ErrorKind::StoreError,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdeaError>;
