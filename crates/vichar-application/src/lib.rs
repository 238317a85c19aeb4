//! Application layer for Vichar: the session-scoped workflow coordinator
//! and the session lifecycle service, wired over injected repositories and
//! collaborator clients.

mod bootstrap;
mod coordinator;
mod session_service;

#[cfg(test)]
mod testing;

pub use bootstrap::AppContext;
pub use coordinator::WorkflowCoordinator;
pub use session_service::SessionService;
