//! Conversational AI collaborator interface.

use crate::error::Result;
use crate::persona::Persona;
use crate::session::{HistoryEntry, SourceCitation, WorkflowMode};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request payload for a conversational exchange.
///
/// `message` is the new user text; `history` is the log as it stood before
/// that message was appended. Profile and location are free-form hints the
/// backend uses for localized, personalized replies.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The new user message text.
    pub message: String,
    /// Conversation history prior to `message`, chronological order.
    pub history: Vec<HistoryEntry>,
    /// Persona the reply should adopt.
    pub persona: Persona,
    /// Whether the session is in critique mode (Refinery phase).
    pub critique_mode: bool,
    /// The active workflow phase.
    pub workflow_mode: WorkflowMode,
    /// Opaque user profile hints, forwarded unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<serde_json::Value>,
    /// User location hint (e.g., city), forwarded unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
}

/// A successful reply from the conversational collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text.
    pub content: String,
    /// Source citations, if the backend grounded the reply.
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
    /// Opaque visualization payload for the UI, if any.
    #[serde(default)]
    pub visualization: Option<serde_json::Value>,
}

/// External conversational AI collaborator.
#[async_trait]
pub trait ChatCollaborator: Send + Sync {
    /// Sends one exchange to the backend and returns the assistant reply.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Collaborator` on transport failures or when
    /// the backend reports a failed generation.
    async fn send(&self, request: ChatRequest) -> Result<ChatReply>;
}
