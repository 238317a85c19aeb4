//! Canvas repository trait.

use super::model::CanvasItem;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for canvas item persistence.
///
/// Canvas items are grouped by owning session. Extraction writes whole
/// batches at once (all-or-nothing per extraction call); the user curates
/// by deleting items individually.
#[async_trait]
pub trait CanvasRepository: Send + Sync {
    /// Returns all canvas items belonging to a session, in creation order.
    async fn items_for_session(&self, session_id: &str) -> Result<Vec<CanvasItem>>;

    /// Appends a batch of items atomically.
    ///
    /// Either every item in the batch is persisted or none is.
    async fn save_batch(&self, session_id: &str, items: &[CanvasItem]) -> Result<()>;

    /// Deletes a single item by ID.
    ///
    /// # Errors
    ///
    /// Returns `VicharError::NotFound` if no item with that ID exists for
    /// the session.
    async fn delete_item(&self, session_id: &str, item_id: &str) -> Result<()>;
}
