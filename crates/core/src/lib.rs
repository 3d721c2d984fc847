//! Landing-page idea generation: the Idea aggregate, the creation pipeline,
//! and the collaborator seams (generative model, durable store).

pub mod error;
pub mod generation;
pub mod idea;
pub mod store;

pub use error::{ErrorKind, GenerationError, IdeaError, Result};
pub use idea::model::{Idea, StoredIdea};
pub use idea::service::IdeaService;
pub use idea::IdeaId;
pub use landing_forge_extract::Section;
