//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation,
//! including roles, source citations, and message content.

use crate::persona::Persona;
use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

impl MessageRole {
    /// Wire name expected by external collaborators.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A source citation attached to an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Display title of the cited source.
    pub title: String,
    /// URL of the cited source.
    pub url: String,
}

/// A single message in a conversation history.
///
/// Messages are immutable once created and appended only, ordered by
/// creation time. Persona, critique flag, sources, and visualization are
/// UI-only metadata; only role and content ever cross the collaborator
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The text content of the message.
    pub content: String,
    /// Persona the assistant adopted for this reply, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    /// Whether this message is a critique produced during the Refinery phase.
    #[serde(default)]
    pub critique: bool,
    /// Source citations attached to an assistant reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceCitation>,
    /// Opaque visualization payload handed back to the UI unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<serde_json::Value>,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl Message {
    /// Creates a user message with the current timestamp.
    ///
    /// Content validation (non-empty text) belongs to the conversation log;
    /// this constructor only assembles the value.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            persona: None,
            critique: false,
            sources: Vec::new(),
            visualization: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates an assistant message with the current timestamp.
    pub fn assistant(
        content: impl Into<String>,
        persona: Persona,
        sources: Vec<SourceCitation>,
        critique: bool,
    ) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            persona: Some(persona),
            critique,
            sources,
            visualization: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attaches a visualization payload to the message.
    pub fn with_visualization(mut self, visualization: Option<serde_json::Value>) -> Self {
        self.visualization = visualization;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_shape() {
        let msg = Message::user("I want to open a tiffin service");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "I want to open a tiffin service");
        assert!(msg.persona.is_none());
        assert!(!msg.critique);
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn test_assistant_message_carries_metadata() {
        let sources = vec![SourceCitation {
            title: "MSME registration".to_string(),
            url: "https://udyamregistration.gov.in".to_string(),
        }];
        let msg = Message::assistant("Consider licensing first.", Persona::Critical, sources, true);
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(msg.persona, Some(Persona::Critical));
        assert!(msg.critique);
        assert_eq!(msg.sources.len(), 1);
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
    }
}
