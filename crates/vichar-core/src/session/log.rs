//! Append-only conversation log.
//!
//! The log is the ordered record of the dialogue, exposed to the UI for
//! rendering and to outbound collaborator calls as conversation history.
//! Entries are never reordered or removed individually; the only
//! destructive operation is clearing the whole log (canvas items survive
//! that independently).

use crate::error::{Result, VicharError};
use crate::persona::Persona;
use crate::session::message::{Message, MessageRole, SourceCitation};
use serde::{Deserialize, Serialize};

/// A `{role, content}` pair in the exact shape external AI collaborators
/// expect as conversation history. No other message metadata is exposed
/// outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sender role: `"user"` or `"assistant"`.
    pub role: String,
    /// The message text.
    pub content: String,
}

/// Append-only ordered record of a session's dialogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if `text` is empty or
    /// whitespace-only. Nothing is appended in that case.
    pub fn append_user(&mut self, text: impl Into<String>) -> Result<&Message> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(VicharError::validation("Message text must not be empty"));
        }
        self.messages.push(Message::user(text));
        Ok(self.last_unchecked())
    }

    /// Appends an assistant message with its UI-facing metadata.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if `text` is empty or
    /// whitespace-only.
    pub fn append_assistant(
        &mut self,
        text: impl Into<String>,
        persona: Persona,
        sources: Vec<SourceCitation>,
        critique: bool,
    ) -> Result<&Message> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(VicharError::validation("Message text must not be empty"));
        }
        self.messages
            .push(Message::assistant(text, persona, sources, critique));
        Ok(self.last_unchecked())
    }

    /// Appends an already-assembled assistant message (used when the reply
    /// carries a visualization payload).
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Validation` if the message content is empty.
    pub fn append_message(&mut self, message: Message) -> Result<&Message> {
        if message.content.trim().is_empty() {
            return Err(VicharError::validation("Message text must not be empty"));
        }
        self.messages.push(message);
        Ok(self.last_unchecked())
    }

    /// Produces the conversation history in the shape collaborators expect:
    /// a lazy, finite, restartable sequence of `{role, content}` pairs in
    /// chronological order.
    pub fn history_for_collaborator(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.messages.iter().map(|m| HistoryEntry {
            role: m.role.as_str().to_string(),
            content: m.content.clone(),
        })
    }

    /// The full in-order message list, for UI rendering.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log contains no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes every message. Canvas items have an independent lifecycle
    /// and are untouched by this.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn last_unchecked(&self) -> &Message {
        // Safe: callers only invoke this right after a push
        self.messages.last().unwrap()
    }
}
