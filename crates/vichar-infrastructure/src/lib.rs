//! Infrastructure layer for Vichar: TOML-file implementations of the core
//! persistence traits, plus path resolution.

pub mod paths;
pub mod storage;
mod toml_canvas_repository;
mod toml_session_repository;
mod toml_state_repository;

pub use paths::VicharPaths;
pub use toml_canvas_repository::TomlCanvasRepository;
pub use toml_session_repository::TomlSessionRepository;
pub use toml_state_repository::TomlStateRepository;
