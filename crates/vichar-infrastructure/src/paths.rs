//! Unified path management for vichar configuration and data files.
//!
//! All vichar configuration and persisted state live under a single
//! per-user config directory, consistent across platforms.

use std::path::PathBuf;
use vichar_core::error::{Result, VicharError};

/// Unified path management for vichar.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/vichar/            # Config directory
/// ├── config.toml              # Backend endpoint configuration
/// ├── app_state.toml           # Active session pointer
/// ├── sessions/                # One TOML file per session
/// │   └── <session-id>.toml
/// └── canvas/                  # One TOML board file per session
///     └── <session-id>.toml
/// ```
pub struct VicharPaths;

impl VicharPaths {
    /// Returns the vichar configuration directory
    /// (e.g., `~/.config/vichar/` on Linux).
    ///
    /// # Errors
    ///
    /// Returns `VicharError::Config` if the platform config directory
    /// cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("vichar"))
            .ok_or_else(|| VicharError::config("Cannot determine config directory"))
    }

    /// Returns the sessions directory.
    pub fn sessions_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("sessions"))
    }

    /// Returns the canvas boards directory.
    pub fn canvas_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("canvas"))
    }

    /// Returns the app state file path.
    pub fn app_state_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("app_state.toml"))
    }

    /// Returns the backend configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
