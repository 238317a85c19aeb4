//! External collaborator interfaces.
//!
//! The coordinator's outward boundary is a set of opaque contracts with
//! backend AI services. Each collaborator is a narrow trait plus typed
//! request/reply DTOs; all real computation (scoring, generation, DPR
//! assembly) happens behind these seams.

mod chat;
mod critique;
mod dpr;
mod extraction;

pub use chat::{ChatCollaborator, ChatReply, ChatRequest};
pub use critique::{CritiqueCollaborator, CritiqueRequest};
pub use dpr::{DprCollaborator, DprContext, DprDocument, DprSection};
pub use extraction::{ExtractedIdea, ExtractionCollaborator, ExtractionRequest};
