//! DPR assembly collaborator interface.
//!
//! A DPR (detailed project report) is a structured multi-section planning
//! document synthesized from canvas items by an external collaborator. The
//! coordinator does not interpret section internals; it normalizes each
//! section only far enough to tell the UI "map of fields" vs "plain text".

use crate::canvas::CanvasItem;
use crate::error::Result;
use crate::persona::Persona;
use crate::session::WorkflowMode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Free-form hints accompanying a DPR assembly request.
///
/// Nothing here is validated beyond being serializable; the backend treats
/// these as context for the generation.
#[derive(Debug, Clone, Serialize)]
pub struct DprContext {
    /// Backend user identifier.
    pub user_id: String,
    /// Active persona at the time of the request.
    pub persona: Persona,
    /// Active workflow phase.
    pub mode: WorkflowMode,
    /// Title of the owning session.
    pub session_title: String,
    /// Opaque user data forwarded unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value>,
    /// One-line statement of the business idea, if the user supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_idea: Option<String>,
}

/// A single normalized document section.
///
/// Sections arrive as a heterogeneous bag of key→value content blocks; the
/// only normalization applied is distinguishing field maps from plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DprSection {
    /// A map of named fields, rendered by the UI as a form-like block.
    Fields(BTreeMap<String, Value>),
    /// A plain text block.
    Text(String),
}

impl DprSection {
    /// Normalizes an arbitrary JSON value into a section.
    ///
    /// Objects become field maps; everything else is flattened to text.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => DprSection::Fields(map.into_iter().collect()),
            Value::String(text) => DprSection::Text(text),
            other => DprSection::Text(other.to_string()),
        }
    }
}

/// An assembled DPR document: ordered named sections plus metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DprDocument {
    /// Named sections in presentation order.
    pub sections: BTreeMap<String, DprSection>,
    /// Document-level metadata (generation time, idea summary, ...).
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
    /// Which model the backend used, when reported.
    #[serde(default)]
    pub model_used: Option<String>,
}

/// External collaborator that assembles a DPR from canvas items.
#[async_trait]
pub trait DprCollaborator: Send + Sync {
    /// Requests assembly of a structured document from the given items.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Collaborator` on transport failures or when
    /// the backend reports a failed assembly.
    async fn assemble(&self, items: Vec<CanvasItem>, context: DprContext) -> Result<DprDocument>;
}
