//! Application state module.

pub mod model;
pub mod repository;

pub use model::AppState;
pub use repository::StateRepository;
