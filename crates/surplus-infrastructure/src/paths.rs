//! Path resolution for Surplus configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/surplus/           # Config directory (platform specific)
//! ├── config.toml              # Client configuration
//! └── session.toml             # Persisted session (mode 600)
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "surplus";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Cannot determine the user config directory")]
    ConfigDirNotFound,
}

impl From<PathError> for surplus_core::SurplusError {
    fn from(err: PathError) -> Self {
        surplus_core::SurplusError::config(err.to_string())
    }
}

/// Resolves file locations, rooted at the platform config directory or at
/// an explicit base (used by tests and `--config-dir`).
#[derive(Debug, Clone)]
pub struct SurplusPaths {
    base: PathBuf,
}

impl SurplusPaths {
    /// Paths under `<config_dir>/surplus`.
    pub fn from_platform() -> Result<Self, PathError> {
        let base = dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join(APP_DIR);
        Ok(Self { base })
    }

    /// Paths under an explicit directory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn config_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.base.join("session.toml")
    }
}
