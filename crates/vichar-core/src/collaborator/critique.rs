//! Critique collaborator interface.

use crate::error::Result;
use crate::session::HistoryEntry;
use async_trait::async_trait;
use serde::Serialize;

/// Request payload for an idea critique.
#[derive(Debug, Clone, Serialize)]
pub struct CritiqueRequest {
    /// The user-stated ideas to critique.
    pub ideas: Vec<String>,
    /// Conversation history for context, chronological order.
    pub history: Vec<HistoryEntry>,
}

/// External critique collaborator (the cynical-investor voice of the
/// Refinery phase).
#[async_trait]
pub trait CritiqueCollaborator: Send + Sync {
    /// Returns a critique of the given ideas.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Collaborator` on transport failures or when
    /// the backend reports a failed generation.
    async fn critique(&self, request: CritiqueRequest) -> Result<String>;
}
