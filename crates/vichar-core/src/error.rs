//! Error types for the Vichar application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Vichar application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every failure mode is
/// non-fatal to a running session; the UI surfaces these as transient,
/// dismissible notifications.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum VicharError {
    /// Invalid user input (empty message text, empty idea list, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Canvas extraction was requested on an empty conversation
    #[error("Cannot extract ideas from an empty conversation")]
    EmptyConversation,

    /// DPR assembly was requested with no canvas items selected
    #[error("Cannot assemble a document from an empty selection")]
    EmptySelection,

    /// Failure returned by or thrown from an external AI/backend call
    #[error("Collaborator error: {message}")]
    Collaborator {
        message: String,
        retryable: bool,
        /// Server-suggested retry delay in seconds, from a Retry-After header
        retry_after_secs: Option<u64>,
    },

    /// A DPR assembly request is already in flight for this session
    #[error("A document assembly request is already in progress")]
    AssemblyInProgress,

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl VicharError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a non-retryable Collaborator error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
            retryable: false,
            retry_after_secs: None,
        }
    }

    /// Creates a retryable Collaborator error
    pub fn collaborator_retryable(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
            retryable: true,
            retry_after_secs: None,
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Collaborator error
    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Collaborator { .. })
    }

    /// Check if this error is worth retrying at the transport level
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Collaborator { retryable: true, .. })
    }

    /// Server-suggested retry delay in seconds, if one was reported
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Self::Collaborator {
                retry_after_secs, ..
            } => *retry_after_secs,
            _ => None,
        }
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a precondition failure on a derived operation
    /// (empty conversation / empty selection)
    pub fn is_empty_precondition(&self) -> bool {
        matches!(self, Self::EmptyConversation | Self::EmptySelection)
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VicharError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VicharError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VicharError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VicharError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for VicharError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, VicharError>`.
pub type Result<T> = std::result::Result<T, VicharError>;
