//! Configuration loading.
//!
//! Reads `ClientConfig` from `config.toml` and layers environment
//! overrides on top.

use crate::paths::SurplusPaths;
use crate::storage::AtomicTomlFile;
use std::path::PathBuf;
use surplus_core::Result;
use surplus_core::config::ClientConfig;

pub struct ConfigService {
    file: AtomicTomlFile<ClientConfig>,
}

impl ConfigService {
    /// Service for the default `config.toml`.
    pub fn new() -> Result<Self> {
        let paths = SurplusPaths::from_platform()?;
        Ok(Self::with_path(paths.config_file()))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the file alone. A missing file yields the defaults; a malformed
    /// one is a configuration error.
    pub fn load_file(&self) -> Result<ClientConfig> {
        let config = self
            .file
            .load()
            .map_err(|e| surplus_core::SurplusError::config(e.to_string()))?
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// File values overridden by `SURPLUS_API_BASE` / `SURPLUS_BROWSE_SOURCE`.
    pub fn load(&self) -> Result<ClientConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = self.load_file()?.apply_env_overrides(lookup)?;
        tracing::debug!(
            "[Config] api_base_url={} browse_source={}",
            config.normalized_base_url(),
            config.browse_source
        );
        Ok(config)
    }

    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        config.validate()?;
        self.file.save(config)?;
        Ok(())
    }
}
