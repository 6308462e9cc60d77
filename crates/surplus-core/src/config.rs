//! Client configuration model.

use crate::error::{Result, SurplusError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const ENV_API_BASE: &str = "SURPLUS_API_BASE";
/// Environment variable overriding [`ClientConfig::browse_source`].
pub const ENV_BROWSE_SOURCE: &str = "SURPLUS_BROWSE_SOURCE";

/// Which data source backs the browse view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BrowseSourceKind {
    #[default]
    Remote,
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub browse_source: BrowseSourceKind,
    /// Overrides the default session file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            browse_source: BrowseSourceKind::default(),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Base URL without trailing slashes, so paths can be appended directly.
    pub fn normalized_base_url(&self) -> String {
        self.api_base_url.trim().trim_end_matches('/').to_string()
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Taking a lookup function keeps tests independent of the process
    /// environment.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = base;
        }
        if let Some(source) = lookup(ENV_BROWSE_SOURCE).filter(|v| !v.trim().is_empty()) {
            self.browse_source = source.trim().parse().map_err(|_| {
                SurplusError::config(format!(
                    "{ENV_BROWSE_SOURCE} must be 'remote' or 'fixture', got '{source}'"
                ))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let base = self.normalized_base_url();
        if base.is_empty() {
            return Err(SurplusError::config("api_base_url must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SurplusError::config(format!(
                "api_base_url must start with http:// or https://, got '{base}'"
            )));
        }
        Ok(())
    }
}
