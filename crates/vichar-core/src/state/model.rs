//! Application state domain model.
//!
//! Contains application-level state that persists across restarts.

use serde::{Deserialize, Serialize};

/// Application state that persists across restarts.
///
/// Currently this tracks only which session was last active, so the app
/// can restore it on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// ID of the currently active session.
    pub active_session_id: Option<String>,
}

impl AppState {
    /// Creates a new AppState with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
