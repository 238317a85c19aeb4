//! TOML-file-based CanvasRepository implementation.
//!
//! Each session's canvas is one TOML board file. Batch appends are
//! read-modify-write updates under the board file's lock, so an extraction
//! batch lands atomically (all items or none).

use crate::paths::VicharPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vichar_core::canvas::{CanvasItem, CanvasRepository};
use vichar_core::error::{Result, VicharError};

/// On-disk shape of a session's canvas board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CanvasBoard {
    #[serde(default)]
    items: Vec<CanvasItem>,
}

/// Canvas repository backed by one TOML board file per session.
pub struct TomlCanvasRepository {
    canvas_dir: PathBuf,
}

impl TomlCanvasRepository {
    /// Creates a repository at the default location (`~/.config/vichar`).
    pub fn default_location() -> Result<Self> {
        Self::new(VicharPaths::canvas_dir()?)
    }

    /// Creates a repository rooted at the given canvas directory.
    pub fn new(canvas_dir: impl AsRef<Path>) -> Result<Self> {
        let canvas_dir = canvas_dir.as_ref().to_path_buf();
        fs::create_dir_all(&canvas_dir)
            .map_err(|e| VicharError::io(format!("Failed to create canvas directory: {}", e)))?;
        Ok(Self { canvas_dir })
    }

    fn board_for(&self, session_id: &str) -> AtomicTomlFile<CanvasBoard> {
        AtomicTomlFile::new(self.canvas_dir.join(format!("{}.toml", session_id)))
    }
}

#[async_trait]
impl CanvasRepository for TomlCanvasRepository {
    async fn items_for_session(&self, session_id: &str) -> Result<Vec<CanvasItem>> {
        Ok(self
            .board_for(session_id)
            .load()?
            .unwrap_or_default()
            .items)
    }

    async fn save_batch(&self, session_id: &str, items: &[CanvasItem]) -> Result<()> {
        let items = items.to_vec();
        self.board_for(session_id)
            .update(CanvasBoard::default(), move |board| {
                board.items.extend(items);
                Ok(())
            })
    }

    async fn delete_item(&self, session_id: &str, item_id: &str) -> Result<()> {
        let item_id_owned = item_id.to_string();
        self.board_for(session_id)
            .update(CanvasBoard::default(), move |board| {
                let before = board.items.len();
                board.items.retain(|item| item.id != item_id_owned);
                if board.items.len() == before {
                    return Err(VicharError::not_found("canvas item", item_id_owned.clone()));
                }
                Ok(())
            })
    }
}
