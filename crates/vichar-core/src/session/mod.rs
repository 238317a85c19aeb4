//! Session domain module.
//!
//! This module contains all session-related domain models, the conversation
//! log, and the repository interface.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`)
//! - `message`: Conversation message types (`MessageRole`, `Message`)
//! - `log`: Append-only conversation log (`ConversationLog`, `HistoryEntry`)
//! - `workflow`: Workflow phase type (`WorkflowMode`)
//! - `repository`: Repository trait for session persistence

mod log;
mod message;
mod model;
mod repository;
mod workflow;

// Re-export public API
pub use log::{ConversationLog, HistoryEntry};
pub use message::{Message, MessageRole, SourceCitation};
pub use model::Session;
pub use repository::SessionRepository;
pub use workflow::WorkflowMode;
