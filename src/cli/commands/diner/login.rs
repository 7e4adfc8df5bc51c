use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::super::utils::{diner_err, diner_service};

/// Command to log an existing diner in by phone number
pub struct LoginCommand;

impl LoginCommand {
    /// Creates a new LoginCommand
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for LoginCommand {
    /// Log a diner in
    ///
    /// # Arguments
    ///
    /// * `args` - 10-digit phone number
    ///
    /// # Errors
    ///
    /// Returns CliError if the phone is invalid or unregistered
    async fn execute(&self, args: &[String]) -> CommandResult {
        let diner = diner_service()?;
        let user = diner.login(&args[0]).map_err(diner_err)?;

        Ok(format!("Welcome back, {}!", user.display_name()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "login".to_string(),
            description: "Log a registered diner in".to_string(),
            category: "diner".to_string(),
            args: vec![CommandArg {
                name: "phone".to_string(),
                description: "10-digit phone number used at registration".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec!["odymenu diner login 9876543210".to_string()],
        }
    }
}
