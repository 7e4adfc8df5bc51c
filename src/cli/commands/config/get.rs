use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
};

/// Command for reading values from the loaded configuration.
///
/// Without a path the whole configuration is printed as TOML; with a
/// dotted path only that value is shown.
///
/// # Example Usage
///
/// ```bash
/// odymenu config get
/// odymenu config get playback.settle_delay_ms
/// odymenu config get api.base_url
/// ```
pub struct GetCommand {
    /// Shared reference to the loaded configuration.
    config: Arc<Config>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Shared reference to the loaded configuration
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn lookup<'a>(root: &'a toml::Value, path: &str) -> Option<&'a toml::Value> {
        let mut current = root;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

#[async_trait]
impl Command for GetCommand {
    /// Prints the configuration, or one value from it.
    ///
    /// # Arguments
    ///
    /// * `args` - Optional dotted configuration path
    ///
    /// # Errors
    ///
    /// Returns CliError if the path does not exist or the configuration
    /// cannot be serialized
    async fn execute(&self, args: &[String]) -> CommandResult {
        let rendered = self.config.to_toml().map_err(|e| CliError::ServiceError {
            service: "Config".to_string(),
            details: e.to_string(),
        })?;

        let Some(path) = args.first() else {
            return Ok(rendered);
        };

        let root: toml::Value =
            toml::from_str(&rendered).map_err(|e| CliError::ServiceError {
                service: "Config".to_string(),
                details: e.to_string(),
            })?;

        let value = Self::lookup(&root, path).ok_or_else(|| CliError::InvalidArgument {
            arg: "path".to_string(),
            reason: format!("No configuration value at '{path}'"),
        })?;

        Ok(format!("{path}: {}", format_toml_value(value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration values".to_string(),
            category: "config".to_string(),
            args: vec![CommandArg {
                name: "path".to_string(),
                description: "Configuration path (e.g., playback.settle_delay_ms). Prints everything if omitted.".to_string(),
                required: false,
                value_type: ArgType::Path,
            }],
            examples: vec![
                "odymenu config get".to_string(),
                "odymenu config get playback.viewport_threshold".to_string(),
                "odymenu config get general.log_level".to_string(),
            ],
        }
    }
}
