//! Client configuration.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CalNotesError, CalNotesResult};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Client configuration at ~/.config/calnotes/config.toml
///
/// Every key can also be set through a `CALNOTES_` environment variable
/// (e.g. `CALNOTES_API_URL`), which takes precedence over the file.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Base URL of the notes API, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: default_api_url(),
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> CalNotesResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalNotesError::Config("Could not determine config directory".into()))?
            .join("calnotes");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> CalNotesResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(config_path)
    }

    /// Load from `path` (optional) layered under the environment.
    pub fn load_from(path: PathBuf) -> CalNotesResult<Self> {
        let config: ClientConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CALNOTES"))
            .build()
            .map_err(|e| CalNotesError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalNotesError::Config(e.to_string()))?;

        Ok(config)
    }
}
