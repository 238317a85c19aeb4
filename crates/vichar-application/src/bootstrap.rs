//! Wiring helpers for hosting applications.
//!
//! The UI host builds one `AppContext` at startup and asks it for a
//! coordinator whenever a session is opened.

use crate::coordinator::WorkflowCoordinator;
use crate::session_service::SessionService;
use std::sync::Arc;
use vichar_collaborators::{BackendConfig, CollaboratorSet};
use vichar_core::canvas::CanvasRepository;
use vichar_core::error::Result;
use vichar_core::session::{Session, SessionRepository};
use vichar_infrastructure::{TomlCanvasRepository, TomlSessionRepository, TomlStateRepository};

/// Long-lived application context: repositories, collaborator clients,
/// and the session service built over them.
pub struct AppContext {
    pub sessions: Arc<SessionService>,
    session_repository: Arc<dyn SessionRepository>,
    canvas_repository: Arc<dyn CanvasRepository>,
    collaborators: CollaboratorSet,
}

impl AppContext {
    /// Builds the full stack at the default locations
    /// (`~/.config/vichar/` for storage and configuration).
    pub fn default_location() -> Result<Self> {
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(TomlSessionRepository::default_location()?);
        let canvas_repository: Arc<dyn CanvasRepository> =
            Arc::new(TomlCanvasRepository::default_location()?);
        let state_repository = Arc::new(TomlStateRepository::default_location()?);
        let collaborators = CollaboratorSet::default_location()?;

        Ok(Self {
            sessions: Arc::new(SessionService::new(
                session_repository.clone(),
                state_repository,
            )),
            session_repository,
            canvas_repository,
            collaborators,
        })
    }

    /// Builds the stack with explicit backend configuration, using default
    /// storage locations. Useful when the host manages configuration
    /// itself.
    pub fn with_backend(config: &BackendConfig) -> Result<Self> {
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(TomlSessionRepository::default_location()?);
        let canvas_repository: Arc<dyn CanvasRepository> =
            Arc::new(TomlCanvasRepository::default_location()?);
        let state_repository = Arc::new(TomlStateRepository::default_location()?);
        let collaborators = CollaboratorSet::new(config)?;

        Ok(Self {
            sessions: Arc::new(SessionService::new(
                session_repository.clone(),
                state_repository,
            )),
            session_repository,
            canvas_repository,
            collaborators,
        })
    }

    /// Creates a session-scoped coordinator over the shared stack.
    pub fn coordinator_for(&self, session: Session) -> WorkflowCoordinator {
        WorkflowCoordinator::new(
            session,
            self.session_repository.clone(),
            self.canvas_repository.clone(),
            self.collaborators.chat.clone(),
            self.collaborators.critique.clone(),
            self.collaborators.extraction.clone(),
            self.collaborators.dpr.clone(),
        )
    }
}
