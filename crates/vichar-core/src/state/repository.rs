//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for the persisted active-session pointer.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Returns the active session ID, if one is set.
    async fn get_active_session(&self) -> Option<String>;

    /// Sets the active session ID.
    async fn set_active_session(&self, session_id: String) -> Result<()>;

    /// Clears the active session ID.
    async fn clear_active_session(&self) -> Result<()>;
}
