pub mod id;
pub mod legacy;
pub mod model;
pub mod pipeline;
pub mod service;
pub mod validate;

pub use id::IdeaId;
