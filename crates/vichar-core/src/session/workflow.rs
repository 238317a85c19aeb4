//! Workflow mode types for the idea-development cycle.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The active phase of the Input→Refinery→Anchor idea-development cycle.
///
/// The cycle is not a strict linear state machine: any phase is reachable
/// from any other, and there is no terminal state. The mode selects persona
/// defaults, UI copy, and which collaborator endpoint a user action calls.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowMode {
    /// Free-form idea capture and exploration.
    Input,
    /// Critique phase; forces the critical persona.
    Refinery,
    /// Consolidation phase; entering it triggers canvas extraction.
    Anchor,
}

impl Default for WorkflowMode {
    fn default() -> Self {
        WorkflowMode::Input
    }
}
