//! Canvas extraction collaborator interface.

use crate::error::Result;
use crate::session::{HistoryEntry, WorkflowMode};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request payload for canvas extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRequest {
    /// Full conversation history, chronological order. Never empty; the
    /// coordinator rejects empty conversations before calling out.
    pub history: Vec<HistoryEntry>,
    /// The active workflow phase, as an extraction hint.
    pub mode: WorkflowMode,
}

/// One idea fragment returned by the extraction collaborator.
///
/// `category` is a free string on the wire; the coordinator maps it
/// leniently onto `CanvasCategory` (unknown values become `Other`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedIdea {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// External collaborator that turns a conversation into discrete,
/// categorized idea fragments.
#[async_trait]
pub trait ExtractionCollaborator: Send + Sync {
    /// Analyzes the conversation and returns extracted idea fragments.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Collaborator` on transport failures or when
    /// the backend reports a failed extraction.
    async fn extract(&self, request: ExtractionRequest) -> Result<Vec<ExtractedIdea>>;
}
