//! TOML-file-based SessionRepository implementation.
//!
//! Each session is stored as one TOML file under the sessions directory,
//! written atomically.

use crate::paths::VicharPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use vichar_core::error::{Result, VicharError};
use vichar_core::session::{Session, SessionRepository};

/// Session repository backed by a directory of TOML files.
///
/// Directory structure:
/// ```text
/// base_dir/
/// └── sessions/
///     ├── <session-id-1>.toml
///     └── <session-id-2>.toml
/// ```
pub struct TomlSessionRepository {
    sessions_dir: PathBuf,
}

impl TomlSessionRepository {
    /// Creates a repository at the default location (`~/.config/vichar`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or the sessions directory cannot be created.
    pub fn default_location() -> Result<Self> {
        Self::new(VicharPaths::sessions_dir()?)
    }

    /// Creates a repository rooted at the given sessions directory.
    pub fn new(sessions_dir: impl AsRef<Path>) -> Result<Self> {
        let sessions_dir = sessions_dir.as_ref().to_path_buf();
        fs::create_dir_all(&sessions_dir)
            .map_err(|e| VicharError::io(format!("Failed to create sessions directory: {}", e)))?;
        Ok(Self { sessions_dir })
    }

    /// Returns the sessions directory path.
    pub fn sessions_dir(&self) -> &Path {
        &self.sessions_dir
    }

    fn file_for(&self, session_id: &str) -> AtomicTomlFile<Session> {
        AtomicTomlFile::new(self.sessions_dir.join(format!("{}.toml", session_id)))
    }
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        self.file_for(session_id).load()
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.file_for(&session.id).save(session)
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.file_for(session_id).remove()
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let mut sessions = Vec::new();

        for entry in fs::read_dir(&self.sessions_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            match AtomicTomlFile::<Session>::new(path.clone()).load() {
                Ok(Some(session)) => sessions.push(session),
                Ok(None) => {}
                Err(e) => {
                    // One corrupt file should not hide every other session
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable session file");
                }
            }
        }

        // Newest first, matching the session list in the UI
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vichar_core::Persona;
    use vichar_core::session::WorkflowMode;

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(temp_dir.path().join("sessions")).unwrap();

        let mut session = Session::new("Tiffin service");
        session.persona = Persona::Critical;
        session.workflow_mode = WorkflowMode::Refinery;
        session.log.append_user("I want to open a tiffin service").unwrap();

        repo.save(&session).await.unwrap();

        let loaded = repo.find_by_id(&session.id).await.unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(temp_dir.path()).unwrap();
        assert!(repo.find_by_id("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_sorts_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(temp_dir.path()).unwrap();

        let mut older = Session::new("older");
        older.updated_at = "2026-01-01T00:00:00+00:00".to_string();
        let mut newer = Session::new("newer");
        newer.updated_at = "2026-06-01T00:00:00+00:00".to_string();

        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "newer");
        assert_eq!(all[1].title, "older");
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionRepository::new(temp_dir.path()).unwrap();

        let session = Session::new("to delete");
        repo.save(&session).await.unwrap();
        repo.delete(&session.id).await.unwrap();

        assert!(repo.find_by_id(&session.id).await.unwrap().is_none());
    }
}
