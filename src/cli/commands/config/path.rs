use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{CommandArg, CommandMetadata},
    },
    config::ConfigPaths,
};

/// Command to print where the configuration file lives
pub struct PathCommand;

impl PathCommand {
    /// Creates a new PathCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for PathCommand {
    /// Print the configuration file path
    ///
    /// # Errors
    ///
    /// Returns CliError if the config directory cannot be determined
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let path = ConfigPaths::main_config().map_err(|e| CliError::ServiceError {
            service: "Config".to_string(),
            details: e.to_string(),
        })?;

        Ok(path.display().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "path".to_string(),
            description: "Print the configuration file path".to_string(),
            category: "config".to_string(),
            args: Vec::<CommandArg>::new(),
            examples: vec!["odymenu config path".to_string()],
        }
    }
}
