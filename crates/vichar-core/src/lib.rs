//! Domain layer for Vichar: models, errors, and the trait seams to
//! persistence and the external AI collaborators.

pub mod canvas;
pub mod collaborator;
pub mod error;
pub mod persona;
pub mod session;
pub mod state;

// Re-export common error type
pub use error::VicharError;
pub use persona::Persona;
