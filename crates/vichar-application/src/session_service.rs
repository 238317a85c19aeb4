//! Session lifecycle management.
//!
//! `SessionService` is responsible for:
//! - Creating new sessions
//! - Loading sessions from storage
//! - Switching between sessions
//! - Restoring the last active session on startup
//! - Renaming and archiving sessions

use std::sync::Arc;
use vichar_core::error::{Result, VicharError};
use vichar_core::session::{Session, SessionRepository};
use vichar_core::state::StateRepository;

/// Manages sessions and the active-session pointer.
///
/// Sessions are archived rather than deleted in user-facing flows;
/// `delete_session` exists for cleanup tooling.
pub struct SessionService {
    /// Persistent storage backend for session data
    session_repository: Arc<dyn SessionRepository>,
    /// Application state repository for the active session ID
    state_repository: Arc<dyn StateRepository>,
}

impl SessionService {
    /// Creates a new `SessionService` with repository backends.
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        state_repository: Arc<dyn StateRepository>,
    ) -> Self {
        Self {
            session_repository,
            state_repository,
        }
    }

    /// Creates a new session with the given title and sets it as active.
    ///
    /// The session starts with the default persona and the Input workflow
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the session or the active-session pointer
    /// cannot be persisted.
    pub async fn create_session(&self, title: impl Into<String>) -> Result<Session> {
        let session = Session::new(title);

        self.session_repository.save(&session).await?;
        self.state_repository
            .set_active_session(session.id.clone())
            .await?;

        tracing::info!(session_id = %session.id, "Created session");
        Ok(session)
    }

    /// Attempts to restore the last active session on startup.
    ///
    /// # Returns
    ///
    /// `Some(session)` if an active session was recorded and still exists,
    /// `None` otherwise.
    pub async fn restore_last_session(&self) -> Result<Option<Session>> {
        if let Some(session_id) = self.state_repository.get_active_session().await {
            if let Some(session) = self.session_repository.find_by_id(&session_id).await? {
                return Ok(Some(session));
            }
            // Stale pointer: the session file is gone
            tracing::warn!(session_id = %session_id, "Active session no longer exists");
        }
        Ok(None)
    }

    /// Switches to a different session, loading it from storage.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::NotFound` if the session doesn't exist.
    pub async fn switch_session(&self, session_id: &str) -> Result<Session> {
        let session = self
            .session_repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| VicharError::not_found("session", session_id))?;

        self.state_repository
            .set_active_session(session_id.to_string())
            .await?;

        Ok(session)
    }

    /// Lists all sessions from storage, archived ones included.
    pub async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.session_repository.list_all().await
    }

    /// Renames a session by updating its title.
    pub async fn rename_session(&self, session_id: &str, new_title: String) -> Result<()> {
        let mut session = self
            .session_repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| VicharError::not_found("session", session_id))?;

        session.title = new_title;
        session.touch();

        self.session_repository.save(&session).await
    }

    /// Toggles the archive status of a session.
    pub async fn toggle_archive(&self, session_id: &str) -> Result<()> {
        let mut session = self
            .session_repository
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| VicharError::not_found("session", session_id))?;

        session.is_archived = !session.is_archived;
        session.touch();

        self.session_repository.save(&session).await
    }

    /// Deletes a session from storage and clears the active pointer if it
    /// pointed at the deleted session.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.session_repository.delete(session_id).await?;

        if self.state_repository.get_active_session().await.as_deref() == Some(session_id) {
            self.state_repository.clear_active_session().await?;
        }

        Ok(())
    }

    /// Returns the ID of the currently active session.
    pub async fn active_session_id(&self) -> Option<String> {
        self.state_repository.get_active_session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockSessionRepository, MockStateRepository};

    fn service() -> (
        SessionService,
        Arc<MockSessionRepository>,
        Arc<MockStateRepository>,
    ) {
        let session_repository = Arc::new(MockSessionRepository::new());
        let state_repository = Arc::new(MockStateRepository::new());
        let service = SessionService::new(session_repository.clone(), state_repository.clone());
        (service, session_repository, state_repository)
    }

    #[tokio::test]
    async fn test_create_session_sets_active() {
        let (service, _, _) = service();

        let session = service.create_session("Tiffin service").await.unwrap();

        assert_eq!(service.active_session_id().await, Some(session.id));
    }

    #[tokio::test]
    async fn test_restore_last_session() {
        let (service, session_repository, state_repository) = service();

        let created = service.create_session("to restore").await.unwrap();

        // A second service over the same stores sees the active session
        let service2 = SessionService::new(session_repository, state_repository);
        let restored = service2.restore_last_session().await.unwrap().unwrap();
        assert_eq!(restored.id, created.id);
        assert_eq!(restored.title, "to restore");
    }

    #[tokio::test]
    async fn test_restore_with_stale_pointer() {
        let (service, _, state_repository) = service();

        state_repository
            .set_active_session("gone".to_string())
            .await
            .unwrap();

        assert!(service.restore_last_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_switch_session() {
        let (service, _, _) = service();

        let first = service.create_session("first").await.unwrap();
        let second = service.create_session("second").await.unwrap();
        assert_eq!(service.active_session_id().await, Some(second.id));

        let switched = service.switch_session(&first.id).await.unwrap();
        assert_eq!(switched.title, "first");
        assert_eq!(service.active_session_id().await, Some(first.id));
    }

    #[tokio::test]
    async fn test_switch_to_missing_session() {
        let (service, _, _) = service();
        let err = service.switch_session("no-such-id").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rename_session() {
        let (service, _, _) = service();

        let session = service.create_session("old name").await.unwrap();
        service
            .rename_session(&session.id, "new name".to_string())
            .await
            .unwrap();

        let reloaded = service.switch_session(&session.id).await.unwrap();
        assert_eq!(reloaded.title, "new name");
    }

    #[tokio::test]
    async fn test_toggle_archive() {
        let (service, _, _) = service();

        let session = service.create_session("to archive").await.unwrap();
        service.toggle_archive(&session.id).await.unwrap();

        let reloaded = service.switch_session(&session.id).await.unwrap();
        assert!(reloaded.is_archived);

        // Archived sessions still show up in the list
        assert_eq!(service.list_sessions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_session_clears_active() {
        let (service, _, _) = service();

        let session = service.create_session("to delete").await.unwrap();
        service.delete_session(&session.id).await.unwrap();

        assert_eq!(service.active_session_id().await, None);
    }
}
