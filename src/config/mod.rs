//! Configuration schema definitions and loading.
//!
//! Defines the complete configuration structure for odymenu, including
//! general settings, the REST API endpoint, and playback coordination
//! tunables. All configurations are serializable to/from TOML format.

mod api;
mod general;
mod loading;
mod paths;
mod playback;

pub use api::ApiConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use playback::PlaybackConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for odymenu.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults except the API
/// base URL, which callers that talk to the backend must set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Platform REST API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Playback coordination tunables.
    #[serde(default)]
    pub playback: PlaybackConfig,
}
