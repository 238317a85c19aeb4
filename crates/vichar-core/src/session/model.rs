//! Session domain model.
//!
//! This module contains the core Session entity that represents
//! a brainstorm session in the application's domain layer.

use crate::persona::Persona;
use crate::session::log::ConversationLog;
use crate::session::workflow::WorkflowMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a brainstorm session in the application's domain layer.
///
/// A session contains:
/// - The conversation log for the session
/// - The currently active persona
/// - The active workflow mode (Input, Refinery, or Anchor)
/// - Timestamps for creation and last update
/// - An archive flag (sessions are archived, never hard-deleted, in the
///   standard flows)
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. A session has at most one
/// active persona and one active workflow mode at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// The currently active persona
    #[serde(default)]
    pub persona: Persona,
    /// The active workflow phase
    #[serde(default)]
    pub workflow_mode: WorkflowMode,
    /// Whether the session has been archived
    #[serde(default)]
    pub is_archived: bool,
    /// Ordered conversation log
    #[serde(default)]
    pub log: ConversationLog,
}

impl Session {
    /// Creates a fresh session with a new UUID, the default persona, and
    /// the Input workflow mode.
    pub fn new(title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            created_at: now.clone(),
            updated_at: now,
            persona: Persona::default(),
            workflow_mode: WorkflowMode::default(),
            is_archived: false,
            log: ConversationLog::new(),
        }
    }

    /// Refreshes the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}
