//! Application state repository implementation.
//!
//! Reads and writes the active-session pointer in `app_state.toml`, with
//! the state cached in memory to avoid repeated file I/O.

use crate::paths::VicharPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use vichar_core::error::Result;
use vichar_core::state::{AppState, StateRepository};

/// State repository backed by a single TOML file.
///
/// All methods are async to match the trait; file I/O is small and
/// infrequent (one write per session switch).
#[derive(Clone)]
pub struct TomlStateRepository {
    /// Cached app state loaded from storage.
    state: Arc<Mutex<AppState>>,
    file: Arc<AtomicTomlFile<AppState>>,
}

impl TomlStateRepository {
    /// Creates a repository at the default location and loads the initial
    /// state (defaulting to empty if the file doesn't exist yet).
    pub fn default_location() -> Result<Self> {
        Self::new(VicharPaths::app_state_file()?)
    }

    /// Creates a repository backed by the given file path.
    pub fn new(path: PathBuf) -> Result<Self> {
        let file = AtomicTomlFile::new(path);
        let state = file.load()?.unwrap_or_default();
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            file: Arc::new(file),
        })
    }

    async fn persist(&self, state: &AppState) -> Result<()> {
        self.file.save(state)
    }
}

#[async_trait]
impl StateRepository for TomlStateRepository {
    async fn get_active_session(&self) -> Option<String> {
        self.state.lock().await.active_session_id.clone()
    }

    async fn set_active_session(&self, session_id: String) -> Result<()> {
        let mut cached = self.state.lock().await;
        cached.active_session_id = Some(session_id);
        let snapshot = cached.clone();
        drop(cached);
        self.persist(&snapshot).await
    }

    async fn clear_active_session(&self) -> Result<()> {
        let mut cached = self.state.lock().await;
        cached.active_session_id = None;
        let snapshot = cached.clone();
        drop(cached);
        self.persist(&snapshot).await
    }
}
