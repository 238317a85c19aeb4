//! Canvas domain module.
//!
//! - `model`: canvas item entity and category/color mapping
//! - `repository`: repository trait for canvas persistence

mod model;
mod repository;

pub use model::{CanvasCategory, CanvasItem};
pub use repository::CanvasRepository;
