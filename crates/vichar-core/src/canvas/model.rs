//! Canvas item domain model.
//!
//! Canvas items are durable, categorized idea fragments extracted from a
//! conversation. Their lifecycle is independent of the chat transcript:
//! they survive conversation clearing and are deleted individually by the
//! user.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use uuid::Uuid;

/// Category assigned to an extracted idea fragment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CanvasCategory {
    Feature,
    Risk,
    Opportunity,
    Insight,
    Other,
}

impl CanvasCategory {
    /// Parses a collaborator-supplied category string.
    ///
    /// Unrecognized categories map to `Other` rather than failing; the
    /// collaborator's output is advisory, not validated.
    pub fn parse_lenient(s: &str) -> Self {
        Self::from_str(s.trim()).unwrap_or(CanvasCategory::Other)
    }

    /// Fixed category→color lookup used for display.
    pub fn color(&self) -> &'static str {
        match self {
            CanvasCategory::Feature => "#4CAF50",
            CanvasCategory::Risk => "#F44336",
            CanvasCategory::Opportunity => "#2196F3",
            CanvasCategory::Insight => "#FF9800",
            CanvasCategory::Other => "#9E9E9E",
        }
    }
}

/// A durable, categorized idea fragment owned by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique item identifier (UUID format)
    pub id: String,
    /// Owning session ID
    pub session_id: String,
    /// Short title of the idea fragment
    pub title: String,
    /// Free-text content
    pub content: String,
    /// Assigned category
    pub category: CanvasCategory,
    /// Display color (hex), derived from the category at creation time
    pub color: String,
    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl CanvasItem {
    /// Creates a canvas item for a session, assigning a fresh UUID and the
    /// category's display color.
    pub fn new(
        session_id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: CanvasCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            title: title.into(),
            content: content.into(),
            category,
            color: category.color().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_category_parsing() {
        assert_eq!(CanvasCategory::parse_lenient("risk"), CanvasCategory::Risk);
        assert_eq!(CanvasCategory::parse_lenient("Feature"), CanvasCategory::Feature);
        assert_eq!(
            CanvasCategory::parse_lenient("  opportunity "),
            CanvasCategory::Opportunity
        );
        // Unrecognized categories fall back to Other
        assert_eq!(
            CanvasCategory::parse_lenient("synergy"),
            CanvasCategory::Other
        );
        assert_eq!(CanvasCategory::parse_lenient(""), CanvasCategory::Other);
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(CanvasCategory::Risk.color(), "#F44336");
        // The fallback category carries the neutral color
        assert_eq!(CanvasCategory::Other.color(), "#9E9E9E");
    }

    #[test]
    fn test_new_item_derives_color_from_category() {
        let item = CanvasItem::new("session-1", "Delivery radius", "...", CanvasCategory::Risk);
        assert_eq!(item.color, CanvasCategory::Risk.color());
        assert_eq!(item.session_id, "session-1");
        assert!(!item.id.is_empty());
    }
}
