use std::{env, fs, path::Path};

use tracing::debug;

use super::Config;
use crate::{OdyError, Result};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Reads `config.toml` from the odymenu config directory. A missing
    /// file is not an error; defaults are used instead. The `ODY_API_URL`
    /// environment variable, when set, overrides `api.base_url` so
    /// deployments can inject the backend endpoint without editing files.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Config> {
        let path = super::ConfigPaths::main_config()?;

        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            debug!("No config file at {:?}, using defaults", path);
            Config::default()
        };

        if let Ok(url) = env::var("ODY_API_URL") {
            config.api.base_url = url;
        }

        Ok(config)
    }

    /// Loads the configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Config> {
        let file_content = fs::read_to_string(path)?;
        toml::from_str(&file_content).map_err(|e| OdyError::toml_parse(e, Some(path)))
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| OdyError::Config(format!("{e}")))
    }
}
