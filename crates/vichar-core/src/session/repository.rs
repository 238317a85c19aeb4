//! Session repository trait.
//!
//! Defines the interface for session persistence operations.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing session persistence.
///
/// This trait defines the contract for persisting and retrieving sessions,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., TOML files, SQLite, remote API).
///
/// The coordinator assumes single-writer-per-session semantics; last write
/// wins, with no optimistic-concurrency checks.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: Session found
    /// - `Ok(None)`: Session not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>>;

    /// Saves a session to storage, overwriting any previous version.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Deletes a session from storage.
    ///
    /// Standard flows archive rather than delete; this exists for cleanup
    /// tooling and tests.
    async fn delete(&self, session_id: &str) -> Result<()>;

    /// Lists all stored sessions, archived ones included.
    async fn list_all(&self) -> Result<Vec<Session>>;
}
